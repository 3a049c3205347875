//! Property-based tests for the cache engine
//!
//! Every generated operation sequence is replayed against `LruCore` and a
//! naive reference model; the two must agree after each step.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::lru::LruCore;

// == Reference Model ==
/// Slow but obviously correct LRU: front = most recently used
#[derive(Debug, Default)]
struct ModelLru {
    entries: VecDeque<(String, String)>,
    capacity: usize,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    fn get(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        let entry = self.entries.remove(pos)?;
        let value = entry.1.clone();
        self.entries.push_front(entry);
        Some(value)
    }

    fn put(&mut self, key: &str, value: &str) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((key.to_string(), value.to_string()));
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

// == Strategies ==
/// Small key space so hits, overwrites and evictions all happen often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Size never exceeds capacity, and gets agree with the model
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200),
    ) {
        let mut cache = LruCore::new(capacity);
        let mut model = ModelLru::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    cache.put(&key, &value);
                    model.put(&key, &value);
                }
                CacheOp::Get { key } => {
                    let got = cache.get(&key).map(str::to_owned);
                    prop_assert_eq!(got, model.get(&key));
                }
            }
            prop_assert!(cache.len() <= capacity);
            prop_assert_eq!(cache.keys().collect::<Vec<_>>(), model.keys());
        }
        cache.check_invariants();
    }

    // Overwriting a key returns the newest value and keeps the size
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        v1 in value_strategy(),
        v2 in value_strategy(),
    ) {
        let mut cache = LruCore::new(4);

        cache.put(&key, &v1);
        let size = cache.len();
        cache.put(&key, &v2);

        prop_assert_eq!(cache.len(), size);
        prop_assert_eq!(cache.get(&key), Some(v2.as_str()));
    }

    // A miss returns None and changes nothing
    #[test]
    fn prop_miss_semantics(
        keys in prop::collection::vec(key_strategy(), 0..10),
        missing in "[g-z]{1,3}",
    ) {
        let mut cache = LruCore::new(16);
        for key in &keys {
            cache.put(key, "v");
        }
        let before: Vec<String> = cache.keys().map(str::to_owned).collect();

        prop_assert_eq!(cache.get(&missing), None);
        let after: Vec<String> = cache.keys().map(str::to_owned).collect();
        prop_assert_eq!(before, after);
    }

    // Eviction churn never grows the arena past capacity
    #[test]
    fn prop_pool_reuse_bounded(
        capacity in 1usize..6,
        keys in prop::collection::vec("[a-z]{1,4}", 1..300),
    ) {
        let mut cache = LruCore::new(capacity);
        for key in &keys {
            cache.put(key, key);
        }

        let (allocated, pooled) = cache.pool_counts();
        prop_assert!(allocated <= capacity);
        prop_assert_eq!(allocated, cache.len() + pooled);
        cache.check_invariants();
    }
}
