//! Replay Module
//!
//! Reconstructs a tracked operation's call log from the counter and
//! history lists the tracker left in the store.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::error::{CacheError, Result};
use crate::kv::KeyValueStore;
use crate::tracking::{inputs_key, outputs_key};

// == Replay Reporter ==
/// Stateless reader that renders an operation's recorded call history.
pub struct ReplayReporter {
    /// Shared store connection
    store: Arc<dyn KeyValueStore>,
}

impl ReplayReporter {
    // == Constructor ==
    /// Creates a reporter reading from the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // == Replay ==
    /// Renders the full call log for a tracked operation.
    ///
    /// The operation must have been called at least once: an absent
    /// counter is a precondition failure, not a zero. Inputs and outputs
    /// are paired positionally up to the shorter list, so the unpaired
    /// trailing input left by a failed call is dropped from the report.
    ///
    /// # Returns
    /// One header line `"<op> was called <n> times:"` followed by one
    /// `"<op>(<input>) -> <output>"` line per recorded pair, in call
    /// order.
    pub fn replay(&self, operation: &str) -> Result<String> {
        let raw = self
            .store
            .get(operation)?
            .ok_or_else(|| CacheError::NeverCalled(operation.to_string()))?;
        let count = parse_count(operation, &raw)?;

        let inputs = self.store.lrange(&inputs_key(operation), 0, -1)?;
        let outputs = self.store.lrange(&outputs_key(operation), 0, -1)?;

        let mut report = format!("{} was called {} times:\n", operation, count);
        for (input, output) in inputs.iter().zip(outputs.iter()) {
            // History entries were recorded as rendered text
            let _ = writeln!(
                report,
                "{}({}) -> {}",
                operation,
                String::from_utf8_lossy(input),
                String::from_utf8_lossy(output),
            );
        }
        Ok(report)
    }
}

// == Utility Functions ==
/// Parses a counter record, failing loudly on non-numeric bytes.
fn parse_count(operation: &str, raw: &[u8]) -> Result<i64> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| {
            CacheError::Conversion(format!("counter for '{}' is not an integer", operation))
        })
}
