use std::{cmp::Ordering, fmt};

use bitvec::vec::BitVec;
use tracing::{debug, info_span, trace};

use crate::{
    GraphError,
    adjacency::{AdjacencyList, AdjacencyMatrix},
    disjoint_set::DisjointSet,
    edge::{Edge, VertexId},
    min_heap::MinHeap,
    path::PathResult,
};

const ENDS_IN_RANGE: &str = "edge ends are validated at construction";

/// An immutable, validated, weighted undirected graph.
///
/// Vertices are numbered `0..vertex_count`.  Every `Graph` satisfies the
/// following, checked by [`Graph::new`]:
///
/// - every edge end is a valid vertex and every weight is finite;
/// - no edge is a self-loop;
/// - no pair of vertices is given two conflicting edges (which would make the
///   input a directed graph or a multigraph);
/// - every vertex is reachable from vertex 0.
///
/// The edge list keeps the order it was given in, including exact duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph of `vertex_count` vertices from `edges`, rejecting any
    /// edge list that breaks one of the structural invariants.
    pub fn new(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let edges: Vec<Edge> = edges.into_iter().collect();
        validate(vertex_count, &edges)
            .inspect_err(|error| debug!(%error, "rejected edge list"))?;
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Builds a graph from the first `edge_count` entries of `edges`.  Fails
    /// with [`GraphError::InvalidParameter`] if either count is negative or
    /// if `edge_count` exceeds the number of edges supplied.
    pub fn from_counts(
        vertex_count: i64,
        edge_count: i64,
        edges: &[Edge],
    ) -> Result<Self, GraphError> {
        let vertex_count = usize::try_from(vertex_count).map_err(|_| {
            GraphError::InvalidParameter(format!("negative vertex count {vertex_count}"))
        })?;
        let edge_count = usize::try_from(edge_count).map_err(|_| {
            GraphError::InvalidParameter(format!("negative edge count {edge_count}"))
        })?;
        let edges = edges.get(..edge_count).ok_or_else(|| {
            GraphError::InvalidParameter(format!(
                "edge count {edge_count} exceeds the {} edges supplied",
                edges.len()
            ))
        })?;
        Self::new(vertex_count, edges.iter().copied())
    }

    /// Moves the contents out of `self`, leaving the empty graph behind.
    pub fn take(&mut self) -> Graph {
        std::mem::take(self)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if some edge joins `x` and `y`, in either orientation.
    pub fn has_edge(&self, x: VertexId, y: VertexId) -> bool {
        self.edges.iter().any(|edge| edge.joins(x, y))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns an owned copy of the edge list.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the edges for which `filter` holds, in edge-list order.
    pub fn edges_where(&self, filter: impl Fn(&Edge) -> bool) -> Vec<Edge> {
        self.edges.iter().filter(|edge| filter(edge)).copied().collect()
    }

    /// Total weight of all edges.
    pub fn weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Total weight of the edges for which `filter` holds.
    pub fn weight_where(&self, filter: impl Fn(&Edge) -> bool) -> f64 {
        self.edges
            .iter()
            .filter(|edge| filter(edge))
            .map(|edge| edge.weight)
            .sum()
    }

    /// Iterates over the vertices adjacent to `v`, once per incident edge.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().filter_map(move |edge| edge.other_end(v))
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// The result has the same vertex count and exactly `vertex_count - 1`
    /// edges (none for an empty graph).  Among edges of equal weight the
    /// lower pair of ends is preferred.
    pub fn kruskal(&self) -> Graph {
        let _span = info_span!(
            "kruskal",
            vertices = self.vertex_count,
            edges = self.edges.len()
        )
        .entered();

        let tree_size = self.vertex_count.saturating_sub(1);
        let mut sets = DisjointSet::singletons(self.vertex_count);
        let mut heap = MinHeap::with_less(self.edges.clone(), Edge::lighter_than);
        let mut accepted = Vec::with_capacity(tree_size);

        while accepted.len() < tree_size {
            let Ok(edge) = heap.pop() else {
                break;
            };
            let set_x = sets.find_set(edge.x).expect(ENDS_IN_RANGE);
            let set_y = sets.find_set(edge.y).expect(ENDS_IN_RANGE);
            if set_x != set_y {
                sets.unite(set_x, set_y).expect(ENDS_IN_RANGE);
                trace!(%edge, "accepted");
                accepted.push(edge);
            } else {
                trace!(%edge, "discarded, would close a cycle");
            }
        }

        debug!(edges = accepted.len(), "spanning tree complete");
        Graph {
            vertex_count: self.vertex_count,
            edges: accepted,
        }
    }

    /// Computes shortest distances from `source` to every vertex with
    /// Dijkstra's algorithm.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`] if `source` is not a vertex
    /// and with [`GraphError::NegativeWeight`] if any edge weight is negative.
    /// A path whose length exceeds `f64::MAX` fails with
    /// [`GraphError::DistanceOverflow`] rather than being reported as
    /// unreachable.
    pub fn dijkstra(&self, source: VertexId) -> Result<PathResult, GraphError> {
        let _span = info_span!("dijkstra", source, vertices = self.vertex_count).entered();

        if source >= self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex: source,
                vertex_count: self.vertex_count,
            });
        }
        if let Some(edge) = self.edges.iter().find(|edge| edge.weight < 0.0) {
            return Err(GraphError::NegativeWeight {
                x: edge.x,
                y: edge.y,
                weight: edge.weight,
            });
        }

        let adjacency = AdjacencyList::from_edges(self.vertex_count, &self.edges);
        let mut distances = vec![f64::INFINITY; self.vertex_count];
        let mut predecessors = vec![None; self.vertex_count];
        let mut finalized: BitVec = BitVec::repeat(false, self.vertex_count);
        let mut overflowed_from = vec![None; self.vertex_count];
        distances[source] = 0.0;

        // Every vertex starts in the heap.  An improved distance is pushed as
        // a new entry; the superseded entries are skipped when they surface.
        let mut heap = MinHeap::with_less(
            distances
                .iter()
                .enumerate()
                .map(|(vertex, &distance)| Tentative { vertex, distance })
                .collect(),
            Tentative::closer_than,
        );

        while let Ok(Tentative { vertex, distance }) = heap.pop() {
            if finalized[vertex] || distance > distances[vertex] {
                continue;
            }
            finalized.set(vertex, true);
            if distance.is_infinite() {
                continue;
            }
            for neighbor in adjacency.neighbors(vertex) {
                if finalized[neighbor.vertex] {
                    continue;
                }
                let candidate = distance + neighbor.weight;
                if candidate.is_infinite() {
                    overflowed_from[neighbor.vertex].get_or_insert(vertex);
                } else if candidate < distances[neighbor.vertex] {
                    trace!(from = vertex, to = neighbor.vertex, candidate, "relaxed");
                    distances[neighbor.vertex] = candidate;
                    predecessors[neighbor.vertex] = Some(vertex);
                    heap.push(Tentative {
                        vertex: neighbor.vertex,
                        distance: candidate,
                    });
                }
            }
        }

        // Every vertex of a valid graph is reachable, so a vertex left at
        // infinity was only ever offered an overflowing distance.
        let overflow = distances
            .iter()
            .zip(&overflowed_from)
            .enumerate()
            .find_map(|(y, (distance, from))| {
                from.filter(|_| distance.is_infinite()).map(|x| (x, y))
            });
        if let Some((x, y)) = overflow {
            return Err(GraphError::DistanceOverflow { x, y });
        }
        Ok(PathResult::new(source, distances, predecessors))
    }
}

/// A vertex paired with its tentative distance in Dijkstra's working heap.
#[derive(Clone, Copy, Debug)]
struct Tentative {
    vertex: VertexId,
    distance: f64,
}

impl Tentative {
    fn closer_than(&self, other: &Self) -> bool {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
            == Ordering::Less
    }
}

fn validate(vertex_count: usize, edges: &[Edge]) -> Result<(), GraphError> {
    let _span = info_span!("validate", vertices = vertex_count, edges = edges.len()).entered();

    for edge in edges {
        for vertex in [edge.x, edge.y] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if !edge.weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                x: edge.x,
                y: edge.y,
                weight: edge.weight,
            });
        }
    }

    let matrix = AdjacencyMatrix::from_edges(vertex_count, edges)?;
    if let Some(edge) = edges.iter().find(|edge| edge.is_self_loop()) {
        return Err(GraphError::SelfLoopedGraph { vertex: edge.x });
    }
    if let Some((x, y)) = matrix.first_asymmetry() {
        return Err(GraphError::DirectedGraph { x, y });
    }
    if let Some(unreached) = matrix.to_adjacency_list().first_unreached() {
        return Err(GraphError::MulticonnectedGraph { unreached });
    }
    Ok(())
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for edge in &self.edges {
            writeln!(f, "    {edge}")?;
        }
        writeln!(f, "]")
    }
}
