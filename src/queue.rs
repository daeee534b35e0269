//! Min-ordered priority queue of tree nodes.
//!
//! Backed by [`BinaryHeap`], so `insert` and `extract_min` are both
//! `O(log n)`. Nodes of equal weight leave the queue in the order they
//! entered it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::tree::Node;

struct Entry<S> {
    weight: u64,
    seq: u64,
    node: Node<S>,
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: the heap is a max-heap.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

/// Priority queue returning the lightest node first.
pub struct PriorityQueue<S> {
    heap: BinaryHeap<Entry<S>>,
    next_seq: u64,
}

impl<S> PriorityQueue<S> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Add a node.
    pub fn insert(&mut self, node: Node<S>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            weight: node.weight(),
            seq,
            node,
        });
    }

    /// Remove and return the node with the smallest weight.
    ///
    /// # Errors
    /// Returns `Error::EmptyQueue` if there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<Node<S>> {
        self.heap
            .pop()
            .map(|entry| entry.node)
            .ok_or(Error::EmptyQueue)
    }

    /// Weight of the node `extract_min` would return next.
    pub fn peek_weight(&self) -> Option<u64> {
        self.heap.peek().map(|entry| entry.weight)
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<S> Default for PriorityQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
