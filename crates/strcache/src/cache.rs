//! LruCache: thread-safe wrapper around the LRU engine

use std::fmt;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::lru::LruCore;

/// Fixed-capacity string-to-string LRU cache, safe to share between threads.
///
/// Every operation takes one exclusive lock for its whole duration, so
/// concurrent calls behave as if they ran one after another. Reads take the
/// same lock as writes because a hit reorders the recency list.
///
/// Share it across threads with `Arc<LruCache>`. Dropping the last handle
/// releases every live and pooled node.
pub struct LruCache {
    inner: Mutex<LruCore>,
}

impl LruCache {
    /// Create a new cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries held at once
    ///
    /// # Returns
    /// * `Result<LruCache>` - `CacheError::ZeroCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }

        debug!(capacity, "creating LRU cache");
        Ok(Self {
            inner: Mutex::new(LruCore::new(capacity)),
        })
    }

    /// Create a cache from a validated config
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Get a copy of the value for `key`, marking it most recently used
    ///
    /// # Returns
    /// * `Option<String>` - `None` if the key is not cached
    pub fn get(&self, key: &str) -> Option<String> {
        let mut inner = self.inner.lock();
        inner.get(key).map(str::to_owned)
    }

    /// Insert or overwrite a key-value pair
    ///
    /// An existing key keeps its slot and moves to the front. A new key
    /// evicts the least recently used entry first when the cache is full.
    pub fn put(&self, key: &str, value: &str) {
        let mut inner = self.inner.lock();
        inner.put(key, value);
    }

    /// Get the number of live entries
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Get the number of live entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get the cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Check for a key without changing its recency
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    /// Get a copy of the value for `key` without changing its recency
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.lock().peek(key).map(str::to_owned)
    }

    /// Remove a key from the cache, returning its value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.lock().remove(key)
    }

    /// Remove every entry. Freed nodes stay pooled for later inserts.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Snapshot of the keys, most recently used first
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys().map(str::to_owned).collect()
    }

    #[cfg(test)]
    pub(crate) fn with_core<R>(&self, f: impl FnOnce(&LruCore) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl fmt::Debug for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("LruCache")
            .field("len", &inner.len())
            .field("capacity", &inner.capacity())
            .finish()
    }
}
