//! Cache Store Module
//!
//! Bounded LRU cache combining HashMap storage with recency tracking and
//! release-on-eviction.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, info, trace};

use crate::cache::{CacheEntry, CacheStats, EntryInfo, RecencyOrder, Release};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Bounded LRU Cache ==
/// Fixed-capacity LRU cache that owns its values and hands each one to the
/// release operation when the entry leaves the cache.
///
/// Invariants:
/// - at most `capacity` live entries, at every point in time
/// - every live key is tracked exactly once in the recency order
///
/// With `touch_on_miss` enabled the recency order may also hold keys that
/// were looked up but never stored. Those keys take up eviction slots (a
/// missed key that is then stored counts against its own insertion) but are
/// never released.
pub struct BoundedLruCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Access order, least recently used first
    recency: RecencyOrder<K>,
    /// Teardown applied to values leaving the cache
    releaser: R,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of live entries
    capacity: usize,
    touch_on_miss: bool,
    release_on_overwrite: bool,
}

impl<K, V, R> BoundedLruCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries, using default policies.
    pub fn new(capacity: usize, releaser: R) -> Result<Self> {
        Self::from_config(&CacheConfig::with_capacity(capacity), releaser)
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig, releaser: R) -> Result<Self> {
        if config.capacity == 0 {
            return Err(CacheError::InvalidCapacity(config.capacity));
        }

        info!(
            "Editor cache initialized: capacity={}, touch_on_miss={}, release_on_overwrite={}",
            config.capacity, config.touch_on_miss, config.release_on_overwrite
        );

        Ok(Self {
            entries: HashMap::with_capacity(config.capacity),
            recency: RecencyOrder::with_capacity(config.capacity + 1),
            releaser,
            stats: CacheStats::new(),
            capacity: config.capacity,
            touch_on_miss: config.touch_on_miss,
            release_on_overwrite: config.release_on_overwrite,
        })
    }

    // == Get ==
    /// Looks up a value, marking the key as most recently used.
    ///
    /// On a miss the key is still recorded as most recently used when
    /// `touch_on_miss` is set. Never evicts.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.lookup(key).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.lookup(key).map(|entry| &mut entry.value)
    }

    fn lookup(&mut self, key: &K) -> Option<&mut CacheEntry<V>> {
        let hit = self.entries.contains_key(key);
        if hit || self.touch_on_miss {
            self.recency.touch(key.clone());
        }

        if hit {
            trace!(key = ?key, "cache hit");
            self.stats.record_hit();
        } else {
            trace!(key = ?key, "cache miss");
            self.stats.record_miss();
        }

        let entry = self.entries.get_mut(key)?;
        entry.record_access();
        Some(entry)
    }

    // == Put ==
    /// Stores `value` under `key` and marks the key as most recently used.
    ///
    /// If the key is new and the recency order already tracks `capacity`
    /// keys, the front of the order is evicted (and released, if it holds a
    /// value) first. Overwriting a key releases the old value
    /// only when `release_on_overwrite` is set.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            let old = std::mem::replace(entry, CacheEntry::new(value));
            self.stats.record_replacement();
            self.recency.touch(key.clone());

            if self.release_on_overwrite {
                debug!(key = ?key, "releasing replaced value");
                self.releaser.release(old.into_value());
            } else {
                debug!(key = ?key, "replaced value without release");
            }
        } else {
            // Counts every tracked key, the incoming one included when a
            // lookup miss left it in the order.
            if self.recency.len() >= self.capacity {
                self.evict_oldest();
            }

            self.entries.insert(key.clone(), CacheEntry::new(value));
            self.recency.touch(key);
        }

        self.refresh_sizes();
    }

    // == Evict Oldest ==
    /// Pops the front of the recency order. Keys without a value (the
    /// incoming key among them) are dropped without a release; popping
    /// continues past them only while the cache is still full.
    fn evict_oldest(&mut self) {
        while let Some(oldest) = self.recency.pop_oldest() {
            match self.entries.remove(&oldest) {
                Some(entry) => {
                    debug!(key = ?oldest, "evicting least recently used entry");
                    self.stats.record_eviction();
                    self.releaser.release(entry.into_value());
                    break;
                }
                None => {
                    trace!(key = ?oldest, "dropping untracked key from recency order");
                    if self.entries.len() < self.capacity {
                        break;
                    }
                }
            }
        }
    }

    // == Release ==
    /// Removes `key` and releases its value. No-op if `key` has no value,
    /// even if it is tracked in the recency order.
    pub fn release(&mut self, key: &K) {
        let Some(entry) = self.entries.remove(key) else {
            return;
        };

        self.recency.remove(key);
        self.stats.record_release();
        self.refresh_sizes();

        debug!(key = ?key, "releasing entry");
        self.releaser.release(entry.into_value());
    }

    // == Release All ==
    /// Releases every live entry and clears the recency order.
    ///
    /// Returns the number of values released.
    pub fn release_all(&mut self) -> usize {
        let keys: Vec<K> = self
            .recency
            .iter()
            .filter(|k| self.entries.contains_key(*k))
            .cloned()
            .collect();
        self.recency.clear();

        let count = keys.len();
        for key in keys {
            if let Some(entry) = self.entries.remove(&key) {
                self.stats.record_release();
                self.releaser.release(entry.into_value());
            }
        }

        self.refresh_sizes();
        if count > 0 {
            debug!("released {} remaining entries", count);
        }
        count
    }

    // == For Each ==
    /// Applies `f` to every live value, least recently used first.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V),
    {
        for (_, value) in self.iter() {
            f(value);
        }
    }

    /// Iterates live `(key, value)` pairs, least recently used first.
    /// Does not affect recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.recency
            .iter()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, &entry.value)))
    }

    /// Live keys, least recently used first.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency or stats.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Access metadata for a live entry.
    pub fn entry_info(&self, key: &K) -> Option<EntryInfo> {
        self.entries.get(key).map(CacheEntry::info)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of keys in the recency order, including keys with no value.
    pub fn tracked_keys(&self) -> usize {
        self.recency.len()
    }

    fn refresh_sizes(&mut self) {
        self.stats.set_sizes(self.entries.len(), self.recency.len());
    }
}

impl<K, V, R> Drop for BoundedLruCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    /// Releases what is left, unless the thread is already unwinding: a
    /// releaser panicking mid-unwind would abort the process. Values are
    /// then dropped without a release.
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        self.release_all();
    }
}

impl<K, V, R> fmt::Debug for BoundedLruCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedLruCache")
            .field("capacity", &self.capacity)
            .field("recency", &self.recency)
            .field("len", &self.entries.len())
            .field("touch_on_miss", &self.touch_on_miss)
            .field("release_on_overwrite", &self.release_on_overwrite)
            .finish()
    }
}
