//! Cache Statistics Module
//!
//! Tracks lookup hits and misses, evictions, and releases.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache activity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries removed to make room for a new one
    pub evictions: u64,
    /// Entries removed by explicit release (including `release_all`)
    pub releases: u64,
    /// Values replaced by a put on an existing key
    pub replacements: u64,
    /// Current number of live entries
    pub total_entries: usize,
    /// Current number of keys in the recency order, value-less ones included
    pub tracked_keys: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Release ==
    /// Increments the explicit release counter.
    pub fn record_release(&mut self) {
        self.releases += 1;
    }

    // == Record Replacement ==
    /// Increments the overwrite counter.
    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    // == Update Sizes ==
    /// Updates the entry and tracked-key gauges.
    pub fn set_sizes(&mut self, total_entries: usize, tracked_keys: usize) {
        self.total_entries = total_entries;
        self.tracked_keys = tracked_keys;
    }
}
