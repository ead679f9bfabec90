use std::fmt::Debug;

use derivative::Derivative;

use crate::GraphError;

/// An array-backed binary min-heap.
///
/// Elements are ordered by a "less than" relation, which is `PartialOrd::lt`
/// unless another relation is supplied through [`MinHeap::with_less`].  The
/// relation must be a strict weak order for the heap property to hold.
#[derive(Derivative)]
#[derivative(Clone(bound = "T: Clone, F: Clone"), Debug(bound = "T: Debug"))]
pub struct MinHeap<T, F = fn(&T, &T) -> bool> {
    items: Vec<T>,
    #[derivative(Debug = "ignore")]
    less: F,
}

fn partial_lt<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

impl<T: PartialOrd> MinHeap<T> {
    /// Creates an empty heap ordered by `PartialOrd`.
    pub fn new() -> Self {
        Self::with_less(Vec::new(), partial_lt::<T>)
    }

    /// Builds a heap ordered by `PartialOrd` from existing elements.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::with_less(items, partial_lt::<T>)
    }
}

impl<T: PartialOrd> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Builds a heap from existing elements in O(n), ordered by `less`.
    pub fn with_less(items: Vec<T>, less: F) -> Self {
        let mut heap = Self { items, less };
        for i in (0..heap.items.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum element without removing it.
    pub fn top(&self) -> Result<&T, GraphError> {
        self.items.first().ok_or(GraphError::EmptyContainer)
    }

    /// Removes and returns the minimum element.
    pub fn pop(&mut self) -> Result<T, GraphError> {
        if self.items.is_empty() {
            return Err(GraphError::EmptyContainer);
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !(self.less)(&self.items[i], &self.items[parent]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && (self.less)(&self.items[left], &self.items[smallest]) {
                smallest = left;
            }
            if right < len && (self.less)(&self.items[right], &self.items[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T, F> Extend<T> for MinHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
