use std::fmt;

use crate::edge::VertexId;

/// Single-source shortest paths, as produced by
/// [`Graph::dijkstra`](crate::Graph::dijkstra).
///
/// Unreachable vertices have an infinite distance and no predecessor.  The
/// source has distance zero and no predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    source: VertexId,
    distances: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl PathResult {
    pub(crate) fn new(
        source: VertexId,
        distances: Vec<f64>,
        predecessors: Vec<Option<VertexId>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance from the source to `v`; `None` if `v` is out of
    /// range, `Some(f64::INFINITY)` if `v` is unreachable.
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.distances.get(v).copied()
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// The vertex immediately before `v` on a shortest path from the source.
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// Reconstructs a shortest path from the source to `target`, source
    /// first.  Returns `None` if `target` is out of range or unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            // A well-formed predecessor chain visits each vertex at most once.
            if path.len() > self.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for v in 0..self.len() {
            write!(f, "    {v}: ")?;
            match self.path_to(v) {
                Some(path) => {
                    let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
                    writeln!(f, "{} via {}", self.distances[v], hops.join(" -> "))?
                }
                None => writeln!(f, "unreachable")?,
            }
        }
        writeln!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathResult {
        // 0 -> 1 -> 2, 3 unreachable.
        PathResult::new(
            0,
            vec![0.0, 1.0, 3.0, f64::INFINITY],
            vec![None, Some(0), Some(1), None],
        )
    }

    #[test]
    fn test_distances() {
        let result = sample();
        assert_eq!(result.source(), 0);
        assert_eq!(result.len(), 4);
        assert_eq!(result.distance(2), Some(3.0));
        assert_eq!(result.distance(3), Some(f64::INFINITY));
        assert_eq!(result.distance(4), None);
        assert!(result.is_reachable(1));
        assert!(!result.is_reachable(3));
        assert!(!result.is_reachable(4));
    }

    #[test]
    fn test_predecessors() {
        let result = sample();
        assert_eq!(result.predecessor(0), None);
        assert_eq!(result.predecessor(2), Some(1));
        assert_eq!(result.predecessor(3), None);
    }

    #[test]
    fn test_path_to() {
        let result = sample();
        assert_eq!(result.path_to(0), Some(vec![0]));
        assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(result.path_to(3), None);
        assert_eq!(result.path_to(10), None);
    }

    #[test]
    fn test_broken_chain() {
        let result = PathResult::new(0, vec![0.0, 1.0, 1.0], vec![None, Some(2), Some(1)]);
        assert_eq!(result.path_to(1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "[\n    0: 0 via 0\n    1: 1 via 0 -> 1\n    2: 3 via 0 -> 1 -> 2\n    3: unreachable\n]\n"
        );
    }
}
