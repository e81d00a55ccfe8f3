//! Error types for the editor cache
//!
//! Cache operations themselves are total; only construction and
//! configuration loading can fail.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the editor cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must hold at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// A configuration value could not be parsed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the editor cache.
pub type Result<T> = std::result::Result<T, CacheError>;
