//! LRU (Least Recently Used) engine
//!
//! Index + recency list over the node pool. Links are slot indices into the
//! pool arena, so unlink, push-front and evict are all O(1).
//! Not synchronized; `LruCache` puts it behind a lock.

use std::collections::HashMap;

use ahash::RandomState;
use tracing::trace;

use crate::pool::NodePool;

/// Fixed-capacity string LRU with pooled nodes
pub(crate) struct LruCore {
    map: HashMap<String, usize, RandomState>,
    pool: NodePool,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl LruCore {
    /// Create an engine holding at most `capacity` entries
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            pool: NodePool::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        }
    }

    /// Look up a key and mark it most recently used
    pub(crate) fn get(&mut self, key: &str) -> Option<&str> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        Some(self.pool.node(idx).value.as_str())
    }

    /// Look up a key without touching recency
    pub(crate) fn peek(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .map(|&idx| self.pool.node(idx).value.as_str())
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Insert or overwrite a key-value pair, evicting the tail when full
    pub(crate) fn put(&mut self, key: &str, value: &str) {
        if let Some(&idx) = self.map.get(key) {
            // Update existing
            self.pool.node_mut(idx).set_value(value);
            self.move_to_front(idx);
            return;
        }

        // The evicted index key donates its buffer to the new one
        let index_key = if self.map.len() >= self.capacity {
            match self.evict() {
                Some(mut old) => {
                    old.clear();
                    old.push_str(key);
                    old
                }
                None => key.to_owned(),
            }
        } else {
            key.to_owned()
        };

        let idx = self.pool.acquire(key, value);
        self.push_front(idx);
        self.map.insert(index_key, idx);
    }

    /// Remove a key, returning its value
    pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        let value = std::mem::take(&mut self.pool.node_mut(idx).value);
        self.pool.release(idx);
        Some(value)
    }

    /// Drop every entry. Nodes stay in the pool for reuse.
    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.pool.release_all();
        self.head = None;
        self.tail = None;
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used
    pub(crate) fn keys(&self) -> Keys<'_> {
        Keys {
            core: self,
            cursor: self.head,
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return; // Already at front
        }

        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;

        let node = self.pool.node_mut(idx);
        node.prev = None;
        node.next = old_head;

        if let Some(head_idx) = old_head {
            self.pool.node_mut(head_idx).prev = Some(idx);
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let node = self.pool.node_mut(idx);
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev {
            Some(prev_idx) => self.pool.node_mut(prev_idx).next = next,
            None => self.head = next,
        }

        match next {
            Some(next_idx) => self.pool.node_mut(next_idx).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Evict the tail node. Returns the key string that indexed it.
    fn evict(&mut self) -> Option<String> {
        let tail_idx = self.tail?;
        let (key, _) = self.map.remove_entry(self.pool.node(tail_idx).key.as_str())?;
        self.unlink(tail_idx);
        self.pool.release(tail_idx);
        trace!(key = %key, slot = tail_idx, "evicted least recently used entry");
        Some(key)
    }

    #[cfg(test)]
    pub(crate) fn pool_counts(&self) -> (usize, usize) {
        (self.pool.allocated(), self.pool.pooled())
    }

    /// Panic if the index, list and pool disagree
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.pool.node(idx);
            assert_eq!(node.prev, prev, "broken back link at slot {}", idx);
            assert_eq!(self.map.get(node.key.as_str()), Some(&idx));
            prev = Some(idx);
            cursor = node.next;
            seen += 1;
            assert!(seen <= self.map.len(), "cycle in recency list");
        }
        assert_eq!(self.tail, prev);
        assert_eq!(seen, self.map.len());
        assert!(self.map.len() <= self.capacity);
        assert_eq!(self.pool.allocated(), self.map.len() + self.pool.pooled());
    }
}

/// Iterator over keys from most to least recently used
pub(crate) struct Keys<'a> {
    core: &'a LruCore,
    cursor: Option<usize>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let core = self.core;
        let node = core.pool.node(self.cursor?);
        self.cursor = node.next;
        Some(node.key.as_str())
    }
}
