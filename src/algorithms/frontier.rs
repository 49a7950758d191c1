use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithms::node::NodeId;

#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour; equal costs pop in insertion order.
        match other.cost.total_cmp(&self.cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            other => other,
        }
    }
}

/// Pending nodes ordered by cost, first-in first-out among equal costs.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<QueueEntry>,
    counter: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, cost: f64) {
        self.counter += 1;
        self.heap.push(QueueEntry {
            cost,
            seq: self.counter,
            node,
        });
        self.peak = self.peak.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries held at once.
    pub fn peak(&self) -> usize {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::node::SearchTree;
    use crate::grid::Position;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut tree = SearchTree::new();
        (0..n).map(|i| tree.push_root(Position::new(i, i), 0.0)).collect()
    }

    #[test]
    fn pops_lowest_cost_first() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 3.5);
        frontier.push(ids[1], 1.25);
        frontier.push(ids[2], 2.0);
        assert_eq!(frontier.pop(), Some(ids[1]));
        assert_eq!(frontier.pop(), Some(ids[2]));
        assert_eq!(frontier.pop(), Some(ids[0]));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let ids = ids(4);
        let mut frontier = Frontier::new();
        for &id in &ids {
            frontier.push(id, 7.0);
        }
        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(popped, ids);
    }

    #[test]
    fn tracks_peak_length() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 1.0);
        frontier.push(ids[1], 1.0);
        frontier.pop();
        frontier.push(ids[2], 1.0);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peak(), 2);
        assert!(!frontier.is_empty());
    }
}
