//! Editor Cache - A bounded LRU cache for editor instances
//!
//! Keeps a fixed number of resource handles alive, keyed by path, and
//! releases the least recently used one when room is needed.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedLruCache, Destroy, DestroyOnRelease, DropOnRelease, Release, SharedCache};
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{CacheError, Result};

/// Editor cache keyed by note path, tearing editors down via [`Destroy`].
pub type EditorCache<E> = BoundedLruCache<String, E, DestroyOnRelease>;

/// Creates an [`EditorCache`] from configuration.
pub fn editor_cache<E: Destroy>(config: &CacheConfig) -> Result<EditorCache<E>> {
    BoundedLruCache::from_config(config, DestroyOnRelease)
}
