#![allow(dead_code)]

use wgraph::{Edge, Graph};

pub fn edges(list: &[(usize, usize, f64)]) -> Vec<Edge> {
    list.iter().copied().map(Edge::from).collect()
}

/// Six vertices, eleven edges; the minimum spanning tree weighs 7.
pub fn spanning_tree_fixture() -> Graph {
    Graph::new(
        6,
        edges(&[
            (0, 1, 8.0),
            (1, 5, 2.0),
            (5, 0, 2.0),
            (0, 4, 3.0),
            (1, 4, 0.0),
            (1, 3, 1.0),
            (3, 4, 3.0),
            (3, 2, 5.0),
            (1, 2, 10.0),
            (4, 2, 2.0),
            (2, 5, 9.0),
        ]),
    )
    .unwrap()
}

/// Eight vertices, thirteen edges, non-negative weights.
pub fn shortest_path_fixture() -> Graph {
    Graph::new(
        8,
        edges(&[
            (0, 1, 5.0),
            (0, 2, 8.0),
            (0, 3, 11.0),
            (1, 4, 4.0),
            (2, 3, 3.0),
            (2, 4, 2.0),
            (3, 5, 8.0),
            (4, 5, 6.0),
            (4, 7, 1.0),
            (5, 6, 13.0),
            (5, 7, 24.0),
            (6, 7, 5.0),
            (2, 5, 9.0),
        ]),
    )
    .unwrap()
}

/// Shortest distances by exhaustive relaxation (Bellman-Ford style), used
/// as an independent check.
pub fn brute_force_distances(graph: &Graph, source: usize) -> Vec<f64> {
    let mut distances = vec![f64::INFINITY; graph.vertex_count()];
    distances[source] = 0.0;
    for _ in 0..graph.vertex_count() {
        for edge in graph.edges() {
            for (from, to) in [(edge.x, edge.y), (edge.y, edge.x)] {
                let candidate = distances[from] + edge.weight;
                if candidate < distances[to] {
                    distances[to] = candidate;
                }
            }
        }
    }
    distances
}
