//! Validated weighted undirected graphs with minimum spanning trees
//! (Kruskal) and single-source shortest paths (Dijkstra).
//!
//! ```
//! use wgraph::{Edge, Graph};
//!
//! let graph = Graph::new(
//!     3,
//!     [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(2, 0, 4.0)],
//! )
//! .unwrap();
//! assert_eq!(graph.kruskal().weight(), 3.0);
//! assert_eq!(graph.dijkstra(0).unwrap().distance(2), Some(3.0));
//! ```

pub mod adjacency;
pub mod disjoint_set;
pub mod edge;
pub mod error;
pub mod graph;
pub mod min_heap;
pub mod parse;
pub mod path;
pub mod tracing_support;

mod util;

#[cfg(test)]
mod graph_test_support;

pub use disjoint_set::DisjointSet;
pub use edge::{Edge, VertexId};
pub use error::GraphError;
pub use graph::Graph;
pub use min_heap::MinHeap;
pub use parse::ParseError;
pub use path::PathResult;
