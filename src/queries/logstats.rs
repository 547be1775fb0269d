//! Log Statistics Module
//!
//! Builds a report over an nginx access-log collection using counting
//! queries only.

use std::fmt;

use serde::Serialize;
use serde_json::json;

use crate::error::Result;
use crate::queries::DocumentCollection;

// == Tracked Methods ==
/// HTTP methods the report breaks down individually.
pub const TRACKED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

// == Method Count ==
/// Log count for a single HTTP method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodCount {
    /// The HTTP method
    pub method: String,
    /// Number of log lines using it
    pub count: u64,
}

// == Log Report ==
/// Aggregate statistics over an access-log collection.
#[derive(Debug, Clone, Serialize)]
pub struct LogReport {
    /// Total number of log documents
    pub total: u64,
    /// Per-method breakdown, in `TRACKED_METHODS` order
    pub methods: Vec<MethodCount>,
    /// Number of `GET /status` health checks
    pub status_checks: u64,
}

// == Log Stats ==
/// Computes log statistics with one counting query per line of the report.
pub fn log_stats(collection: &dyn DocumentCollection) -> Result<LogReport> {
    let total = collection.count_documents(&json!({}))?;

    let methods = TRACKED_METHODS
        .iter()
        .map(|method| {
            let count = collection.count_documents(&json!({ "method": method }))?;
            Ok(MethodCount {
                method: method.to_string(),
                count,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let status_checks =
        collection.count_documents(&json!({ "method": "GET", "path": "/status" }))?;

    Ok(LogReport {
        total,
        methods,
        status_checks,
    })
}

// == Display ==
impl fmt::Display for LogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} logs", self.total)?;
        writeln!(f, "Methods:")?;
        for method in &self.methods {
            writeln!(f, "\tmethod {}: {}", method.method, method.count)?;
        }
        write!(f, "{} status check", self.status_checks)
    }
}
