//! Node pool backing the recency list
//!
//! Nodes live in a `Vec` arena and are addressed by slot index. Released slots
//! go onto a free list and are handed out again before the arena grows, so
//! their key and value buffers are reused instead of being reallocated.

use tracing::trace;

/// Node in the LRU doubly-linked list
#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl Node {
    /// Replace the payload in place, keeping the existing buffer when it fits
    pub(crate) fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    fn reset(&mut self) {
        self.key.clear();
        self.value.clear();
        self.prev = None;
        self.next = None;
    }
}

/// Arena of nodes plus the free list of dormant slots
#[derive(Debug, Default)]
pub(crate) struct NodePool {
    nodes: Vec<Node>,
    free: Vec<usize>,
}

impl NodePool {
    /// Create a pool with room for `capacity` nodes before the arena reallocates
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Take a node out of the pool (or allocate one) and fill in its payload.
    ///
    /// The returned node is unlinked.
    pub(crate) fn acquire(&mut self, key: &str, value: &str) -> usize {
        if let Some(idx) = self.free.pop() {
            let node = &mut self.nodes[idx];
            node.key.push_str(key);
            node.value.push_str(value);
            trace!(slot = idx, "reusing pooled node");
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                key: key.to_owned(),
                value: value.to_owned(),
                prev: None,
                next: None,
            });
            idx
        }
    }

    /// Return a node to the pool. Its payload is cleared and its links nulled.
    pub(crate) fn release(&mut self, idx: usize) {
        debug_assert!(!self.free.contains(&idx), "node {} released twice", idx);
        self.nodes[idx].reset();
        self.free.push(idx);
    }

    /// Release every slot in the arena
    pub(crate) fn release_all(&mut self) {
        self.free.clear();
        for (idx, node) in self.nodes.iter_mut().enumerate().rev() {
            node.reset();
            self.free.push(idx);
        }
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// Number of slots ever allocated
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.nodes.len()
    }

    /// Number of dormant slots waiting for reuse
    #[cfg(test)]
    pub(crate) fn pooled(&self) -> usize {
        self.free.len()
    }
}
