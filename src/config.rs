//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether tracked operations increment their per-operation counter
    pub count_calls: bool,
    /// Whether tracked operations record argument/result history
    pub record_history: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COUNT_CALLS` - Enable call counting (default: true)
    /// - `RECORD_HISTORY` - Enable call history recording (default: true)
    pub fn from_env() -> Self {
        Self {
            count_calls: env::var("COUNT_CALLS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            record_history: env::var("RECORD_HISTORY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count_calls: true,
            record_history: true,
        }
    }
}
