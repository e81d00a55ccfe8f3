//! Configuration Module
//!
//! Handles loading and validating editor cache configuration.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Number of editor instances kept alive when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 5;

const CAPACITY_VAR: &str = "EDITOR_CACHE_CAPACITY";
const TOUCH_ON_MISS_VAR: &str = "EDITOR_CACHE_TOUCH_ON_MISS";
const RELEASE_ON_OVERWRITE_VAR: &str = "EDITOR_CACHE_RELEASE_ON_OVERWRITE";

/// Editor cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// or deserialized from the host application's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Record a lookup miss in the recency order (compatibility behavior)
    pub touch_on_miss: bool,
    /// Release the superseded value when a key is overwritten
    pub release_on_overwrite: bool,
}

impl CacheConfig {
    /// Creates a config with the given capacity and default policies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EDITOR_CACHE_CAPACITY` - Maximum live editors (default: 5)
    /// - `EDITOR_CACHE_TOUCH_ON_MISS` - Track misses in recency order (default: true)
    /// - `EDITOR_CACHE_RELEASE_ON_OVERWRITE` - Release replaced editors (default: true)
    ///
    /// Missing variables fall back to defaults; present but unparsable ones are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            capacity: parse_var(&lookup, CAPACITY_VAR, parse_number::<usize>)?
                .unwrap_or(defaults.capacity),
            touch_on_miss: parse_var(&lookup, TOUCH_ON_MISS_VAR, parse_flag)?
                .unwrap_or(defaults.touch_on_miss),
            release_on_overwrite: parse_var(&lookup, RELEASE_ON_OVERWRITE_VAR, parse_flag)?
                .unwrap_or(defaults.release_on_overwrite),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config describes a usable cache.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            touch_on_miss: true,
            release_on_overwrite: true,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => parse(raw.trim())
            .map(Some)
            .ok_or_else(|| CacheError::InvalidConfig(format!("{}={:?}", name, raw))),
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
