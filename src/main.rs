//! CacheTrace - an instrumented key-value cache client
//!
//! Demo entry point: runs the canonical cache exercise against an
//! in-memory store and prints the recorded call history.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cachetrace::{
    Config, KeyValueStore, MemoryStore, ReplayReporter, StoredValue, TrackedCache,
};
use cachetrace::tracking::STORE_OPERATION;

/// Main entry point for the CacheTrace demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the process-wide store connection
/// 4. Initialize the tracked cache (flushes the store)
/// 5. Store and read back values of each supported type
/// 6. Print the replay report for the tracked store operation
fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cachetrace=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CacheTrace demo");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: count_calls={}, record_history={}",
        config.count_calls, config.record_history
    );

    // One store connection for the whole process, passed to every consumer
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let cache = TrackedCache::for_store(Arc::clone(&store), &config)?;
    info!("Cache initialized, store flushed");

    // Typed round-trips
    let text_key = cache.store(&StoredValue::from("Hello"))?;
    let int_key = cache.store(&StoredValue::from(42))?;
    let float_key = cache.store(&StoredValue::from(3.14))?;

    println!("text  {} -> {:?}", text_key, cache.get_text(&text_key)?);
    println!("int   {} -> {:?}", int_key, cache.get_int(&int_key)?);
    println!("float {} -> {:?}", float_key, cache.get_text(&float_key)?);

    // Replay everything the tracker recorded
    let reporter = ReplayReporter::new(store);
    println!();
    print!("{}", reporter.replay(STORE_OPERATION)?);

    info!("Demo complete");
    Ok(())
}
