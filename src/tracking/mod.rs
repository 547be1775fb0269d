//! Call Tracking Module
//!
//! Cross-cutting instrumentation for cache operations: per-operation call
//! counters and argument/result history, all stored in the same
//! KeyValueStore the cache writes to.

mod observer;
mod tracker;

// Re-export public types
pub use observer::{CallCounter, CallObserver, HistoryRecorder};
pub use tracker::{CallTracker, TrackedCache, STORE_OPERATION};

// == Derived Keys ==
/// Returns the store key holding an operation's recorded inputs.
pub fn inputs_key(operation: &str) -> String {
    format!("{}:inputs", operation)
}

/// Returns the store key holding an operation's recorded outputs.
pub fn outputs_key(operation: &str) -> String {
    format!("{}:outputs", operation)
}
