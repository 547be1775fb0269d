//! CacheTrace - an instrumented key-value cache client
//!
//! Provides randomly-keyed caching with call counting, history recording,
//! and replay, plus pass-through query glue for a document store.

pub mod cache;
pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod queries;
pub mod replay;
pub mod tracking;

pub use cache::{Cache, StoredValue};
pub use config::Config;
pub use error::{CacheError, Result};
pub use kv::{KeyValueStore, MemoryStore};
pub use replay::ReplayReporter;
pub use tracking::{CallTracker, TrackedCache};
