use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-heap of `(vertex, distance)` entries for label-setting traversal
#[derive(Debug, Default)]
pub struct MinQueue {
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(u64, usize)>>,
}

impl MinQueue {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given tentative distance
    pub fn push(&mut self, vertex: usize, distance: u64) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, u64)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance))
    }
}
