use crate::{GraphError, edge::VertexId};

/// A disjoint-set forest over vertex ids, with union by rank and path halving.
///
/// Slots start out empty; [`Self::create_singleton`] must be called for a
/// vertex before it takes part in [`Self::find_set`] or [`Self::unite`].
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<Option<VertexId>>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates a forest with room for `vertex_count` vertices and no sets.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
            rank: vec![0; vertex_count],
        }
    }

    /// Creates a forest in which every vertex is already its own set.
    pub fn singletons(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).map(Some).collect(),
            rank: vec![0; vertex_count],
        }
    }

    /// Number of vertex slots.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Makes `v` a set of its own.
    pub fn create_singleton(&mut self, v: VertexId) -> Result<(), GraphError> {
        self.check_in_range(v)?;
        self.parent[v] = Some(v);
        self.rank[v] = 0;
        Ok(())
    }

    /// Returns the representative of the set containing `v`.
    pub fn find_set(&mut self, mut v: VertexId) -> Result<VertexId, GraphError> {
        self.check_in_range(v)?;
        loop {
            let parent = self.parent[v].ok_or(GraphError::EmptyContainer)?;
            if parent == v {
                return Ok(v);
            }
            // Parents of initialized slots are always initialized.
            let grandparent = self.parent[parent].unwrap_or(parent);
            self.parent[v] = Some(grandparent);
            v = grandparent;
        }
    }

    /// Merges the sets whose representatives are `set_a` and `set_b`.  Any
    /// member of either set may be passed; it is resolved to its
    /// representative first.  Uniting a set with itself does nothing.
    pub fn unite(&mut self, set_a: VertexId, set_b: VertexId) -> Result<(), GraphError> {
        let a = self.find_set(set_a)?;
        let b = self.find_set(set_b)?;
        if a == b {
            return Ok(());
        }
        let (root, child) = if self.rank[a] >= self.rank[b] {
            (a, b)
        } else {
            (b, a)
        };
        self.parent[child] = Some(root);
        if self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        Ok(())
    }

    /// Returns true if `a` and `b` belong to the same set.
    pub fn same_set(&mut self, a: VertexId, b: VertexId) -> Result<bool, GraphError> {
        Ok(self.find_set(a)? == self.find_set(b)?)
    }

    /// Number of distinct sets among the initialized slots.
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(v, parent)| *parent == Some(v))
            .count()
    }

    fn check_in_range(&self, v: VertexId) -> Result<(), GraphError> {
        if v < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.parent.len(),
            })
        }
    }
}
