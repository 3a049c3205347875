//! Error types for strcache

use thiserror::Error;

/// Result type alias for strcache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error types for cache construction
///
/// Lookups never fail: a missing key is reported as `None`, not as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Cache capacity must be greater than 0")]
    ZeroCapacity,

    /// Configuration value could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
