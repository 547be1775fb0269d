//! Models Module
//!
//! Typed documents exchanged with the document store.

mod documents;

// Re-export public types
pub use documents::{School, TopStudent};
