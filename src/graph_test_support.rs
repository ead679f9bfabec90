use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};
use tracing::info_span;

use crate::{DisjointSet, Edge, Graph, VertexId, tracing_support::init_tracing, util::sort_pair};

/// A random connected, loop-free, conflict-free edge list with small
/// non-negative integer weights.
#[derive(Clone, Debug)]
pub struct ArbConnectedGraph {
    pub vertex_count: usize,
    pub edges: Vec<(VertexId, VertexId, u32)>,
}

impl ArbConnectedGraph {
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|&(x, y, w)| Edge::new(x, y, f64::from(w)))
            .collect()
    }

    pub fn graph(&self) -> Graph {
        Graph::new(self.vertex_count, self.edge_list()).expect("generated graph is valid")
    }
}

impl Arbitrary for ArbConnectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let vertex_count = 1 + usize::arbitrary(g) % 12; // Limit size for testing
        let num_extra_edges = usize::arbitrary(g) % 20;
        let mut pairs = HashSet::new();
        let mut edges = Vec::new();

        // A random spanning tree keeps the graph connected.
        for v in 1..vertex_count {
            let parent = usize::arbitrary(g) % v;
            pairs.insert(sort_pair(parent, v));
            edges.push(orient(g, parent, v));
        }
        for _ in 0..num_extra_edges {
            if vertex_count < 2 {
                break;
            }
            let x = usize::arbitrary(g) % vertex_count;
            let y = usize::arbitrary(g) % vertex_count;
            if x != y && pairs.insert(sort_pair(x, y)) {
                edges.push(orient(g, x, y));
            }
        }

        // Shuffle so the tree edges are not always first.
        for i in (1..edges.len()).rev() {
            let j = usize::arbitrary(g) % (i + 1);
            edges.swap(i, j);
        }

        let edges = edges
            .into_iter()
            .map(|(x, y)| (x, y, u32::arbitrary(g) % 20))
            .collect();
        ArbConnectedGraph {
            vertex_count,
            edges,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Dropping any single edge may disconnect the graph, so only weights
        // are shrunk.
        let this = self.clone();
        Box::new((0..self.edges.len()).filter_map(move |i| {
            let (x, y, w) = this.edges[i];
            (w > 0).then(|| {
                let mut smaller = this.clone();
                smaller.edges[i] = (x, y, w / 2);
                smaller
            })
        }))
    }
}

fn orient(g: &mut Gen, a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if bool::arbitrary(g) { (a, b) } else { (b, a) }
}

/// Checks the structural invariants every `Graph` must satisfy.
pub fn check_graph_consistency(graph: &Graph) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();
    let mut sets = DisjointSet::singletons(graph.vertex_count());
    for edge in graph.edges() {
        assert!(edge.x < graph.vertex_count() && edge.y < graph.vertex_count());
        assert!(!edge.is_self_loop(), "self-loop {edge}");
        assert!(edge.weight.is_finite());
        assert!(graph.has_edge(edge.x, edge.y));
        assert!(graph.has_edge(edge.y, edge.x));
        sets.unite(edge.x, edge.y).unwrap();
    }
    assert!(graph.vertex_count() == 0 || sets.set_count() == 1, "graph is disconnected");
}

/// Checks that `tree` is a spanning tree of `graph`: same vertices, exactly
/// `vertex_count - 1` edges taken from `graph`, and no cycles.
pub fn check_spanning_tree(graph: &Graph, tree: &Graph) {
    assert_eq!(tree.vertex_count(), graph.vertex_count());
    assert_eq!(tree.edge_count(), graph.vertex_count().saturating_sub(1));
    let mut sets = DisjointSet::singletons(tree.vertex_count());
    for edge in tree.edges() {
        assert!(graph.edges().contains(edge), "{edge} is not in the graph");
        assert!(
            !sets.same_set(edge.x, edge.y).unwrap(),
            "{edge} closes a cycle"
        );
        sets.unite(edge.x, edge.y).unwrap();
    }
}

/// Minimum spanning tree weight computed by the `pathfinding` crate.
pub fn reference_mst_weight(arb: &ArbConnectedGraph) -> u64 {
    pathfinding::prelude::kruskal(&arb.edges)
        .map(|(_, _, w)| u64::from(w))
        .sum()
}

/// Shortest distances from `source` computed by the `pathfinding` crate;
/// `None` for unreachable vertices.
pub fn reference_distances(arb: &ArbConnectedGraph, source: VertexId) -> Vec<Option<u64>> {
    let reached = pathfinding::prelude::dijkstra_all(&source, |&v| {
        arb.edges
            .iter()
            .filter_map(move |&(x, y, w)| {
                if x == v {
                    Some((y, u64::from(w)))
                } else if y == v {
                    Some((x, u64::from(w)))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
    });
    (0..arb.vertex_count)
        .map(|v| {
            if v == source {
                Some(0)
            } else {
                reached.get(&v).map(|&(_, cost)| cost)
            }
        })
        .collect()
}
