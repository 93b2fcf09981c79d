//! Priority ordering over pending tasks.
//!
//! A binary min-heap keyed by `(priority, due_date, seq)`, where `seq` is
//! the insertion sequence number. The sequence number makes exact ties on
//! `(priority, due_date)` resolve in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::model::{PriorityKey, Task};

#[derive(Debug, Clone)]
struct Entry {
    key: PriorityKey,
    seq: u64,
    task: Task,
}

impl Entry {
    fn rank(&self) -> (PriorityKey, u64) {
        (self.key, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed: `BinaryHeap` is a max-heap, we want the smallest rank on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(log n).
    pub fn push(&mut self, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            key: task.key(),
            seq,
            task,
        });
    }

    /// O(1); never mutates.
    pub fn peek_min(&self) -> Option<&Task> {
        self.heap.peek().map(|entry| &entry.task)
    }

    /// O(log n). `None` when the queue is empty.
    pub fn pop_min(&mut self) -> Option<Task> {
        self.heap.pop().map(|entry| entry.task)
    }

    /// Remove the first task with this name, wherever it sits, then rebuild
    /// the heap from the remaining entries. O(n).
    pub fn remove_by_name(&mut self, name: &str) -> Option<Task> {
        let mut entries = std::mem::take(&mut self.heap).into_vec();
        let removed = entries
            .iter()
            .position(|entry| entry.task.name == name)
            .map(|idx| entries.swap_remove(idx).task);
        self.heap = BinaryHeap::from(entries);
        removed
    }

    /// Fully ordered copy for display. Recomputed on every call.
    pub fn to_sorted_sequence(&self) -> Vec<Task> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by_key(|entry| entry.rank());
        entries.into_iter().map(|entry| entry.task.clone()).collect()
    }

    /// Pending tasks in the order they were pushed. Snapshots are written in
    /// this order so tie-breaks survive a reload.
    pub fn insertion_order(&self) -> Vec<Task> {
        let mut entries: Vec<&Entry> = self.heap.iter().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.task.clone()).collect()
    }

    /// Unordered iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.heap.iter().map(|entry| &entry.task)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
