use std::collections::{HashMap, VecDeque};

use bitvec::{order::Lsb0, slice::BitSlice, vec::BitVec};

use crate::{
    GraphError,
    edge::{Edge, VertexId},
    util::sort_pair,
};

/// An `n × n` adjacency matrix.  Presence of cell `(x, y)` is one bit in a
/// dense bit vector; the weight given in orientation `x → y` is kept in a
/// sparse map alongside it.
///
/// Folding an undirected edge sets both `(x, y)` and `(y, x)`.  The matrix is
/// only ever asymmetric when the edge list contains conflicting entries for
/// one pair, see [`AdjacencyMatrix::from_edges`].
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    liveness: BitVec,
    weights: HashMap<(VertexId, VertexId), f64>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates an empty matrix.  Fails with [`GraphError::InvalidParameter`]
    /// if `size * size` cells cannot be addressed.
    pub fn with_size(size: usize) -> Result<Self, GraphError> {
        let cells = size
            .checked_mul(size)
            .filter(|&cells| cells <= BitSlice::<usize, Lsb0>::MAX_BITS)
            .ok_or_else(|| {
                GraphError::InvalidParameter(format!(
                    "vertex count {size} is too large for an adjacency matrix"
                ))
            })?;
        Ok(Self {
            liveness: BitVec::repeat(false, cells),
            weights: HashMap::new(),
            size,
        })
    }

    /// Folds `edges` into a matrix of `size` vertices.  Every end of every
    /// edge must be less than `size`.
    ///
    /// An edge whose pair is still empty in both orientations is stored
    /// symmetrically.  An exact repeat of an edge already stored (same pair,
    /// same weight, either orientation) is skipped.  Any other repeat
    /// overwrites only the cell in its own orientation, which leaves the
    /// matrix asymmetric for that pair; later repeats never make it symmetric
    /// again.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Result<Self, GraphError> {
        let mut matrix = Self::with_size(size)?;
        for edge in edges {
            let forward = matrix.get(edge.x, edge.y);
            let backward = matrix.get(edge.y, edge.x);
            match (forward, backward) {
                (None, None) => {
                    matrix.set(edge.x, edge.y, edge.weight);
                    matrix.set(edge.y, edge.x, edge.weight);
                }
                (Some(f), Some(b)) if f == edge.weight && b == edge.weight => {}
                // First conflict for this pair.
                (f, b) if f == b => matrix.set(edge.x, edge.y, edge.weight),
                // Already asymmetric; keep it that way.
                _ => {}
            }
        }
        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the weight stored at `(row, col)`, if any.
    pub fn get(&self, row: VertexId, col: VertexId) -> Option<f64> {
        let index = self.index(row, col)?;
        if self.liveness[index] {
            self.weights.get(&(row, col)).copied()
        } else {
            None
        }
    }

    pub fn contains(&self, row: VertexId, col: VertexId) -> bool {
        self.index(row, col)
            .is_some_and(|index| self.liveness[index])
    }

    fn set(&mut self, row: VertexId, col: VertexId, weight: f64) {
        if let Some(index) = self.index(row, col) {
            self.liveness.set(index, true);
            self.weights.insert((row, col), weight);
        }
    }

    fn index(&self, row: VertexId, col: VertexId) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn cell(&self, index: usize) -> (VertexId, VertexId) {
        (index / self.size, index % self.size)
    }

    /// Returns the first pair `(x, y)`, `x < y`, whose cell differs from the
    /// transposed cell.
    pub fn first_asymmetry(&self) -> Option<(VertexId, VertexId)> {
        self.liveness.iter_ones().find_map(|index| {
            let (row, col) = self.cell(index);
            (self.get(row, col) != self.get(col, row)).then(|| sort_pair(row, col))
        })
    }

    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    /// Derives an adjacency list from the upper triangle of the matrix.  Each
    /// stored pair becomes a neighbor entry in both directions.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let mut list = AdjacencyList::with_size(self.size);
        for index in self.liveness.iter_ones() {
            let (row, col) = self.cell(index);
            if row < col {
                if let Some(weight) = self.get(row, col) {
                    list.add(row, col, weight);
                    list.add(col, row, weight);
                }
            }
        }
        list
    }
}

/// A neighbor entry in an [`AdjacencyList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: f64,
}

/// Per-vertex lists of weighted neighbors.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    pub fn with_size(size: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); size],
        }
    }

    /// Builds the list straight from an edge list, one entry in each
    /// direction per edge.  Every end of every edge must be less than `size`.
    pub fn from_edges(size: usize, edges: &[Edge]) -> Self {
        let mut list = Self::with_size(size);
        for edge in edges {
            list.add(edge.x, edge.y, edge.weight);
            if !edge.is_self_loop() {
                list.add(edge.y, edge.x, edge.weight);
            }
        }
        list
    }

    /// Adds a one-way entry `from → vertex`.
    pub fn add(&mut self, from: VertexId, vertex: VertexId, weight: f64) {
        self.neighbors[from].push(Neighbor { vertex, weight });
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The neighbors of `v`, or an empty slice if `v` is out of range.
    pub fn neighbors(&self, v: VertexId) -> &[Neighbor] {
        self.neighbors.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Breadth-first traversal starting at `start`.
    pub fn bfs(&self, start: VertexId) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    /// Returns the lowest-numbered vertex not reachable from vertex 0, or
    /// `None` if every vertex is reachable.  An empty list is connected.
    pub fn first_unreached(&self) -> Option<VertexId> {
        if self.neighbors.is_empty() {
            return None;
        }
        let mut reached: BitVec = BitVec::repeat(false, self.neighbors.len());
        for v in self.bfs(0) {
            reached.set(v, true);
        }
        reached.first_zero()
    }

    pub fn is_connected(&self) -> bool {
        self.first_unreached().is_none()
    }
}

/// Iterator over the vertices reachable from a start vertex, in
/// breadth-first order.
pub struct Bfs<'a> {
    list: &'a AdjacencyList,
    visited: BitVec,
    queue: VecDeque<VertexId>,
}

impl<'a> Bfs<'a> {
    fn new(list: &'a AdjacencyList, start: VertexId) -> Self {
        let mut visited: BitVec = BitVec::repeat(false, list.len());
        let mut queue = VecDeque::new();
        if start < list.len() {
            visited.set(start, true);
            queue.push_back(start);
        }
        Self {
            list,
            visited,
            queue,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        for neighbor in self.list.neighbors(v) {
            if !self.visited[neighbor.vertex] {
                self.visited.set(neighbor.vertex, true);
                self.queue.push_back(neighbor.vertex);
            }
        }
        Some(v)
    }
}
