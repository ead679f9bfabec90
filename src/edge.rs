use std::{cmp::Ordering, fmt};

use crate::util::sort_pair;

/// Vertices are numbered `0..vertex_count`.
pub type VertexId = usize;

/// A weighted undirected edge.  `(x, y)` and `(y, x)` denote the same edge;
/// the order the ends were given in is kept only so that the edge prints back
/// the way it was written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub x: VertexId,
    pub y: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(x: VertexId, y: VertexId, weight: f64) -> Self {
        Self { x, y, weight }
    }

    /// Returns true if `v` is one of the two ends of this edge.
    pub fn incidental(&self, v: VertexId) -> bool {
        self.x == v || self.y == v
    }

    /// Returns true if this edge joins the unordered pair `{a, b}`.
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        self.ends() == sort_pair(a, b)
    }

    /// The two ends in nondescending order.
    pub fn ends(&self) -> (VertexId, VertexId) {
        sort_pair(self.x, self.y)
    }

    /// Given one end of the edge, returns the other one.  Returns `None` if
    /// `v` is not an end of this edge.
    pub fn other_end(&self, v: VertexId) -> Option<VertexId> {
        if self.x == v {
            Some(self.y)
        } else if self.y == v {
            Some(self.x)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.x == self.y
    }

    /// Total order by weight; equal weights fall back to the sorted ends so
    /// that heap extraction order is deterministic.
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.ends().cmp(&other.ends()))
    }

    /// The "less than" relation used to key edges in a [`MinHeap`](crate::MinHeap).
    pub fn lighter_than(&self, other: &Self) -> bool {
        self.cmp_by_weight(other) == Ordering::Less
    }
}

impl From<(VertexId, VertexId, f64)> for Edge {
    fn from((x, y, weight): (VertexId, VertexId, f64)) -> Self {
        Self::new(x, y, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {{{}}}", self.x, self.y, self.weight)
    }
}
