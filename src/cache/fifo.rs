//! FIFO Tracker Module
//!
//! Records insertion order for first-in, first-out eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks keys in the order they were inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Reads never reorder keys. Only `record_insert` moves a key, and it always
/// moves it to the back.
#[derive(Debug, Default)]
pub struct FifoTracker {
    order: VecDeque<String>,
}

impl FifoTracker {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Insert ==
    /// Marks `key` as the newest insertion.
    ///
    /// A key that is already tracked is moved rather than duplicated.
    pub fn record_insert(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest inserted key, or None when empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    #[cfg(test)]
    fn peek_oldest(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    // == Length ==
    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}
