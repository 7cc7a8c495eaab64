use super::transaction::Transaction;
use std::collections::VecDeque;

/// Bounded, insertion-ordered record of recent transactions.
///
/// Oldest records are evicted first once the capacity is reached. A capacity
/// of zero retains nothing.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<Transaction>,
    capacity: usize,
}

impl History {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(super) fn push(&mut self, transaction: Transaction) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(transaction);
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of records retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> + '_ {
        self.entries.iter()
    }
}
