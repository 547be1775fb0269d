//! Call Observer Module
//!
//! Composable observation behaviors applied around tracked operations.

use std::sync::Arc;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::tracking::{inputs_key, outputs_key};

// == Call Observer Trait ==
/// One observation behavior in a tracking chain.
///
/// Observers are purely observational: they never change the wrapped
/// operation's inputs, return value, or error propagation, and their side
/// effects are confined to the store's tracking keys.
pub trait CallObserver: Send + Sync {
    /// Invoked before the wrapped operation executes.
    ///
    /// Runs even if the operation later fails.
    fn on_call(&self, operation: &str, input: &str) -> Result<()>;

    /// Invoked after the wrapped operation returns successfully.
    ///
    /// Skipped entirely when the operation fails.
    fn on_return(&self, operation: &str, output: &str) -> Result<()>;
}

// == Call Counter ==
/// Counts invocations of an operation.
///
/// The counter lives in the store under the operation name itself, starts
/// absent (read as zero by the store's increment), and moves by exactly
/// one per invocation attempt.
pub struct CallCounter {
    store: Arc<dyn KeyValueStore>,
}

impl CallCounter {
    /// Creates a counter writing to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CallObserver for CallCounter {
    fn on_call(&self, operation: &str, _input: &str) -> Result<()> {
        self.store.incr_by(operation, 1)?;
        Ok(())
    }

    fn on_return(&self, _operation: &str, _output: &str) -> Result<()> {
        Ok(())
    }
}

// == History Recorder ==
/// Records the rendered arguments and result of each invocation.
///
/// Inputs land in `<operation>:inputs` before the operation runs, outputs
/// in `<operation>:outputs` after it returns. A failed call therefore
/// leaves an input entry with no matching output entry; replay tolerates
/// the mismatch by pairing up to the shorter list.
pub struct HistoryRecorder {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryRecorder {
    /// Creates a recorder writing to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CallObserver for HistoryRecorder {
    fn on_call(&self, operation: &str, input: &str) -> Result<()> {
        self.store.rpush(&inputs_key(operation), input.as_bytes())?;
        Ok(())
    }

    fn on_return(&self, operation: &str, output: &str) -> Result<()> {
        self.store.rpush(&outputs_key(operation), output.as_bytes())?;
        Ok(())
    }
}
