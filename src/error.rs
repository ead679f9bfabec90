use crate::edge::VertexId;

/// Errors reported while building a [`Graph`](crate::Graph) or running one of
/// its algorithms.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex or edge count was negative, or claimed more edges than were
    /// supplied.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// An edge connects a vertex to itself.
    #[error("Self-looped graph: edge ({vertex}, {vertex})")]
    SelfLoopedGraph { vertex: VertexId },
    /// The edge list describes two different directed edges between one pair
    /// of vertices.
    #[error("Directed graph: conflicting edges between {x} and {y}")]
    DirectedGraph { x: VertexId, y: VertexId },
    /// Some vertex cannot be reached from vertex 0.
    #[error("Multiconnected graph: vertex {unreached} is not reachable from vertex 0")]
    MulticonnectedGraph { unreached: VertexId },
    /// `top` or `pop` on an empty heap, or a lookup of a disjoint-set slot
    /// that was never initialized.
    #[error("Empty container")]
    EmptyContainer,
    #[error("Vertex {vertex} out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
    /// NaN or infinite edge weight.
    #[error("Invalid weight {weight} on edge ({x}, {y})")]
    InvalidWeight { x: VertexId, y: VertexId, weight: f64 },
    /// Shortest paths are only defined here for non-negative weights.
    #[error("Negative weight {weight} on edge ({x}, {y})")]
    NegativeWeight { x: VertexId, y: VertexId, weight: f64 },
    /// A shortest-path distance grew past `f64::MAX` while relaxing the edge
    /// `(x, y)`.
    #[error("Distance overflow relaxing edge ({x}, {y})")]
    DistanceOverflow { x: VertexId, y: VertexId },
}
