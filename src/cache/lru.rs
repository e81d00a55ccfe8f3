//! Recency Order Module
//!
//! Tracks key access order for LRU eviction.

use std::collections::VecDeque;

// == Recency Order ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// A key appears at most once.
#[derive(Debug, Clone)]
pub struct RecencyOrder<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K: PartialEq> RecencyOrder<K> {
    // == Constructor ==
    /// Creates a new empty recency order.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Creates an empty recency order with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used (moves to back).
    pub fn touch(&mut self, key: K) {
        self.remove(&key);
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the order. Returns true if it was tracked.
    pub fn remove(&mut self, key: &K) -> bool {
        let before = self.order.len();
        self.order.retain(|k| k != key);
        self.order.len() != before
    }

    // == Pop Oldest ==
    /// Returns and removes the least recently used key.
    pub fn pop_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }

    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

impl<K: PartialEq> Default for RecencyOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}
