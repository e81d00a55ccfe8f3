//! Cache Module
//!
//! Bounded LRU caching of owned resource handles with release on eviction.

mod entry;
mod lru;
mod release;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, EntryInfo};
pub use lru::RecencyOrder;
pub use release::{Destroy, DestroyOnRelease, DropOnRelease, Release};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::BoundedLruCache;
