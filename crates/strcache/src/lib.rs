//! # strcache
//!
//! Thread-safe, fixed-capacity string LRU cache.
//!
//! ## Architecture
//! - **Index**: AHash map from key to node slot (O(1))
//! - **LRU List**: Doubly-linked list threaded through slot indices (O(1) reorder and evict)
//! - **Node Pool**: Freed slots are reused, so steady-state churn does not allocate nodes
//! - **Locking**: One `parking_lot::Mutex` per cache serializes every operation
//!
//! ```
//! use strcache::LruCache;
//!
//! let cache = LruCache::new(2)?;
//! cache.put("a", "1");
//! cache.put("b", "2");
//! cache.get("a");
//! cache.put("c", "3"); // evicts "b"
//!
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.get("a").as_deref(), Some("1"));
//! assert_eq!(cache.size(), 2);
//! # Ok::<(), strcache::CacheError>(())
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod lru;
mod pool;

#[cfg(test)]
mod property_tests;

pub use cache::LruCache;
pub use config::{CacheConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use error::{CacheError, Result};
