//! A priority queue whose items can be raised in place.

use crate::error::{ Error, Result };

use std::collections::VecDeque;

/// A max-priority queue of items, ordered by an integer priority.
///
/// Items with equal priorities are dequeued in the order in which they were
/// inserted. Lookups of existing items are linear scans, which is adequate
/// for the frontier of a search on a board of a few hundred cells and lets
/// `insert` double as "decrease-key" without a separate index.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    entries: VecDeque<(T, i64)>,
}

impl<T: PartialEq> PriorityQueue<T> {
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue { entries: VecDeque::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an item with the given priority and report whether the queue
    /// changed.
    ///
    /// With `update`, an existing equal item is never duplicated: if its
    /// priority is at least the given one, nothing happens and `false` is
    /// returned; otherwise its priority is raised.
    pub fn insert(&mut self, item: T, priority: i64, update: bool) -> bool {
        if update {
            if let Some(i) = self.position(&item) {
                if self.entries[i].1 >= priority {
                    return false
                }
                self.entries.remove(i);
            }
        }
        // After all entries of at least the same priority.
        let at = self.entries.iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (item, priority));
        true
    }

    /// Remove and return the item with the highest priority.
    pub fn pop(&mut self) -> Result<T> {
        self.entries.pop_front().map(|(item, _)| item).ok_or(Error::EmptyQueue)
    }

    /// The item with the highest priority, together with that priority.
    pub fn peek(&self) -> Option<(&T, i64)> {
        self.entries.front().map(|(item, p)| (item, *p))
    }

    /// Remove the given item and report whether it was present.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(i) => { self.entries.remove(i); true }
            None    => false
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// The current priority of the given item.
    pub fn priority(&self, item: &T) -> Option<i64> {
        self.position(item).map(|i| self.entries[i].1)
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Iterate over the items in the order in which they would be popped.
    pub fn iter(&self) -> impl Iterator<Item=(&T, i64)> + '_ {
        self.entries.iter().map(|(item, p)| (item, *p))
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|(x, _)| x == item)
    }
}

impl<T: PartialEq> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
