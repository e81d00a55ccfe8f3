//! Shared Cache Handle
//!
//! Thread-safe handle for caches owned by more than one task.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{BoundedLruCache, CacheStats, Release};
use crate::config::CacheConfig;
use crate::error::Result;

/// Cloneable handle to a [`BoundedLruCache`] behind a single mutex.
///
/// Every operation holds the lock for its whole duration, so the recency
/// order and the storage are never observed out of sync. The release
/// operation runs while the lock is held.
pub struct SharedCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    inner: Arc<Mutex<BoundedLruCache<K, V, R>>>,
}

impl<K, V, R> SharedCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    /// Wraps an existing cache.
    pub fn new(cache: BoundedLruCache<K, V, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Builds the cache from configuration and wraps it.
    pub fn from_config(config: &CacheConfig, releaser: R) -> Result<Self> {
        BoundedLruCache::from_config(config, releaser).map(Self::new)
    }

    /// Looks up `key` and returns a clone of the value.
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn put(&self, key: K, value: V) {
        self.inner.lock().await.put(key, value);
    }

    pub async fn release(&self, key: &K) {
        self.inner.lock().await.release(key);
    }

    /// Applies `f` to every live value while holding the lock.
    pub async fn for_each<F>(&self, f: F)
    where
        F: FnMut(&V),
    {
        self.inner.lock().await.for_each(f);
    }

    /// Runs `f` against the cache under the lock, for compound operations
    /// such as "look up, build on miss, store".
    pub async fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut BoundedLruCache<K, V, R>) -> T,
    {
        let mut guard = self.inner.lock().await;
        f(&mut *guard)
    }

    pub async fn release_all(&self) -> usize {
        self.inner.lock().await.release_all()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

impl<K, V, R> Clone for SharedCache<K, V, R>
where
    K: Eq + Hash + Clone + fmt::Debug,
    R: Release<V>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
