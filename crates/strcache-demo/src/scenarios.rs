//! Workloads run by the demo

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use strcache::LruCache;
use tracing::debug;

/// Outcome of the sequential run
#[derive(Debug)]
pub struct BasicReport {
    pub lookups: Vec<(String, Option<String>)>,
    pub size: usize,
}

/// Capacity 3: fill, touch key1 and key2, then insert key4 to push out key3
pub fn basic_operations() -> Result<BasicReport> {
    let cache = LruCache::new(3)?;
    let mut lookups = Vec::new();

    cache.put("key1", "value1");
    cache.put("key2", "value2");
    cache.put("key3", "value3");

    for key in ["key1", "key2"] {
        lookups.push((key.to_string(), cache.get(key)));
    }

    cache.put("key4", "value4");

    for key in ["key3", "key4"] {
        lookups.push((key.to_string(), cache.get(key)));
    }

    Ok(BasicReport {
        lookups,
        size: cache.size(),
    })
}

/// Settings for the multi-threaded run
#[derive(Debug, Clone)]
pub struct ThreadedRun {
    pub capacity: usize,
    pub threads: usize,
    pub ops_per_thread: usize,
    pub pause: Duration,
}

/// Outcome of the multi-threaded run
#[derive(Debug)]
pub struct ThreadedReport {
    pub size: usize,
    /// First key of each worker that is still cached
    pub survivors: Vec<(String, String)>,
}

/// Each worker puts `key{id*ops+i}` -> `value{id*ops+i}` with a short pause
pub fn thread_safety(run: &ThreadedRun) -> Result<ThreadedReport> {
    let cache = Arc::new(LruCache::new(run.capacity)?);

    let handles: Vec<_> = (0..run.threads)
        .map(|id| {
            let cache = Arc::clone(&cache);
            let run = run.clone();
            thread::spawn(move || {
                for i in 0..run.ops_per_thread {
                    let n = id * run.ops_per_thread + i;
                    cache.put(&format!("key{}", n), &format!("value{}", n));
                    if !run.pause.is_zero() {
                        thread::sleep(run.pause);
                    }
                }
                debug!(worker = id, "worker finished");
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;
    }

    let survivors = (0..run.threads)
        .filter_map(|id| {
            let key = format!("key{}", id * run.ops_per_thread);
            cache.get(&key).map(|value| (key, value))
        })
        .collect();

    Ok(ThreadedReport {
        size: cache.size(),
        survivors,
    })
}

/// Put every key of an access pattern in order; returns the keys left, MRU first
pub fn replay_pattern(cache: &LruCache, pattern: &[String]) -> Vec<String> {
    for key in pattern {
        let value = key.replace("key", "value");
        cache.put(key, &value);
    }
    cache.keys()
}
