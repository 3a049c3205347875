//! strcache demo - exercises the LRU cache with sequential and threaded workloads

mod loader;
mod scenarios;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use strcache::{CacheConfig, LruCache};
use tracing::info;

use crate::scenarios::ThreadedRun;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity for the threaded and data-file runs (default: $STRCACHE_CAPACITY or 20)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Number of writer threads
    #[arg(short, long, default_value_t = 5)]
    threads: usize,

    /// Puts issued by each writer thread
    #[arg(short, long, default_value_t = 10)]
    ops_per_thread: usize,

    /// Pause between puts, in milliseconds
    #[arg(long, default_value_t = 1)]
    pause_ms: u64,

    /// `key,value` file to load into a cache
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Access-pattern file (header line, then comma-separated keys) to replay
    #[arg(short, long)]
    pattern: Option<PathBuf>,
}

impl Args {
    fn cache_config(&self) -> CacheConfig {
        match self.capacity {
            Some(capacity) => CacheConfig::new(capacity),
            None if std::env::var_os(strcache::CAPACITY_ENV).is_some() => CacheConfig::from_env(),
            None => CacheConfig::new(20),
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = args.cache_config();
    config.validate()?;

    info!("Starting strcache demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", config.capacity);

    println!("In-Memory LRU Cache Demo");

    println!("\nTesting basic operations:");
    let basic = scenarios::basic_operations()?;
    for (key, value) in &basic.lookups {
        println!("{}: {}", key, value.as_deref().unwrap_or("<absent>"));
    }
    println!("Cache size: {}", basic.size);

    println!("\nTesting thread safety:");
    let run = ThreadedRun {
        capacity: config.capacity,
        threads: args.threads,
        ops_per_thread: args.ops_per_thread,
        pause: Duration::from_millis(args.pause_ms),
    };
    let threaded = scenarios::thread_safety(&run)?;
    println!("Final cache size: {}", threaded.size);
    for (key, value) in &threaded.survivors {
        println!("{}: {}", key, value);
    }

    if let Some(path) = &args.data {
        let pairs = loader::load_pairs(path)?;
        let cache = LruCache::from_config(&config)?;
        for (key, value) in &pairs {
            cache.put(key, value);
        }
        info!("Loaded {} pairs from {}", pairs.len(), path.display());
        println!(
            "\nLoaded {} pairs from {}, {} cached",
            pairs.len(),
            path.display(),
            cache.size()
        );
    }

    if let Some(path) = &args.pattern {
        let pattern = loader::load_access_pattern(path)?;
        let cache = LruCache::from_config(&config)?;
        let left = scenarios::replay_pattern(&cache, &pattern);
        println!(
            "\nReplayed {} accesses, cached (most recent first): {}",
            pattern.len(),
            left.join(", ")
        );
    }

    println!("\nDemo completed.");
    Ok(())
}
