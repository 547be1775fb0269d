//! Error types for the cache client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache client and its instrumentation layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Connecting to or resetting the backing store failed
    #[error("Connection failed: {0}")]
    Connection(String),

    /// A key holds a record of the wrong kind for the requested operation
    #[error("Wrong record type for key: {0}")]
    WrongType(String),

    /// A stored value could not be converted to the requested type
    #[error("Conversion failed: {0}")]
    Conversion(String),

    /// Replay was requested for an operation that was never invoked
    #[error("Operation has never been called: {0}")]
    NeverCalled(String),

    /// A document-store query failed
    #[error("Query failed: {0}")]
    Query(String),

    /// Serializing or deserializing a document failed
    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache client.
pub type Result<T> = std::result::Result<T, CacheError>;
