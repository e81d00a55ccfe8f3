//! Cache Entry Module
//!
//! Wraps a cached value with access metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Entry ==
/// A single cache entry: the owned value plus when it was stored and used.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was stored
    pub inserted_at: DateTime<Utc>,
    /// Last lookup hit (or the insertion time if never read)
    pub last_accessed: DateTime<Utc>,
    /// Number of lookup hits since insertion
    pub hits: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V) -> Self {
        let now = Utc::now();
        Self {
            value,
            inserted_at: now,
            last_accessed: now,
            hits: 0,
        }
    }

    // == Record Access ==
    /// Marks the entry as read.
    pub fn record_access(&mut self) {
        self.last_accessed = Utc::now();
        self.hits += 1;
    }

    /// Consumes the entry, handing back the value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Snapshot of the entry's metadata.
    pub fn info(&self) -> EntryInfo {
        EntryInfo {
            inserted_at: self.inserted_at,
            last_accessed: self.last_accessed,
            hits: self.hits,
        }
    }
}

// == Entry Info ==
/// Read-only view of an entry's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    pub inserted_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub hits: u64,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("notes/todo.txt");

        assert_eq!(entry.value, "notes/todo.txt");
        assert_eq!(entry.hits, 0);
        assert_eq!(entry.inserted_at, entry.last_accessed);
    }

    #[test]
    fn test_entry_record_access() {
        let mut entry = CacheEntry::new(42);

        entry.record_access();
        entry.record_access();

        assert_eq!(entry.hits, 2);
        assert!(entry.last_accessed >= entry.inserted_at);
    }

    #[test]
    fn test_entry_info_snapshot() {
        let mut entry = CacheEntry::new(());
        entry.record_access();

        let info = entry.info();
        assert_eq!(info.hits, 1);
        assert_eq!(info.inserted_at, entry.inserted_at);
        assert_eq!(info.last_accessed, entry.last_accessed);
    }

    #[test]
    fn test_entry_into_value() {
        let entry = CacheEntry::new(String::from("buffer"));
        assert_eq!(entry.into_value(), "buffer");
    }
}
