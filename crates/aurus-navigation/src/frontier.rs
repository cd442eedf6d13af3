//! Open set for A*: a min-heap on `f = g + h` with insertion-order tie-breaking.
//!
//! Re-prioritizing a cell pushes a second entry instead of updating the first.
//! Each entry remembers the `g` it was pushed with, so the search can discard
//! stale entries on pop by comparing against the cell's current best cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One frontier entry. `cell` is a flat grid index.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) f: f64,
    pub(crate) g: f64,
    pub(crate) cell: usize,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// The priority queue depends on `Ord`.
// Flip both keys so the max-heap pops the smallest `f` first and,
// among equal `f`, the entry that was pushed earliest.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier scoped to a single search run.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cell: usize, g: f64, f: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, g, cell, seq });
    }

    pub(crate) fn peek(&self) -> Option<&Entry> {
        self.heap.peek()
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(0, 0.0, 5.0);
        frontier.push(1, 0.0, 2.0);
        frontier.push(2, 0.0, 9.0);
        assert_eq!(frontier.peek().map(|e| e.cell), Some(1));
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|e| e.cell)).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut frontier = Frontier::new();
        for cell in [7, 3, 9, 1] {
            frontier.push(cell, 1.0, 4.0);
        }
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|e| e.cell)).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn test_duplicate_entries_keep_their_g() {
        let mut frontier = Frontier::new();
        frontier.push(4, 10.0, 12.0);
        frontier.push(4, 6.0, 8.0);
        assert_eq!(frontier.len(), 2);
        let first = frontier.pop().unwrap();
        assert_eq!((first.cell, first.g), (4, 6.0));
        let second = frontier.pop().unwrap();
        assert_eq!((second.cell, second.g), (4, 10.0));
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_clear_resets_sequence() {
        let mut frontier = Frontier::new();
        frontier.push(0, 0.0, 1.0);
        frontier.clear();
        assert_eq!(frontier.len(), 0);
        frontier.push(5, 0.0, 1.0);
        frontier.push(6, 0.0, 1.0);
        assert_eq!(frontier.pop().map(|e| e.cell), Some(5));
    }
}
