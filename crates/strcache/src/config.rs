//! Cache configuration
//!
//! Values come from code or from environment variables with sensible defaults.

use std::env;

use crate::error::{CacheError, Result};

/// Environment variable holding the cache capacity
pub const CAPACITY_ENV: &str = "STRCACHE_CAPACITY";

/// Capacity used when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache construction parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
}

impl CacheConfig {
    /// Create a config with an explicit capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Load the config from the environment.
    ///
    /// # Environment Variables
    /// - `STRCACHE_CAPACITY` - Maximum cache entries (default: 1000)
    ///
    /// Missing or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            capacity: env::var(CAPACITY_ENV)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Check that the config describes a usable cache
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
