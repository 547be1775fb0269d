//! Key-Value Store Module
//!
//! Defines the store surface the cache client consumes, plus an in-memory
//! implementation for standalone use and tests.

mod memory;

// Re-export public types
pub use memory::MemoryStore;

use crate::error::Result;

// == Key-Value Store Trait ==
/// The key-value operations the cache and its instrumentation rely on.
///
/// Implementations are shared across callers behind `Arc<dyn KeyValueStore>`,
/// so every method takes `&self`; interior synchronization is the
/// implementation's responsibility. All calls are synchronous round-trips.
pub trait KeyValueStore: Send + Sync {
    /// Stores raw bytes under a key, overwriting any existing record.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Reads the bytes stored under a key, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Atomically adds `delta` to the integer stored under a key.
    ///
    /// An absent key is treated as zero. The stored representation is
    /// decimal ASCII; a non-numeric existing value is a conversion error.
    ///
    /// # Returns
    /// The value after the increment.
    fn incr_by(&self, key: &str, delta: i64) -> Result<i64>;

    /// Appends a value to the tail of the list stored under a key,
    /// creating the list if the key is absent.
    ///
    /// # Returns
    /// The length of the list after the append.
    fn rpush(&self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns the list elements between `start` and `stop`, inclusive.
    ///
    /// Indices follow Redis semantics: negative values count from the end
    /// of the list, so `(0, -1)` selects the whole list. An absent key
    /// yields an empty list.
    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>>;

    /// Removes every key in the store.
    fn flush_all(&self) -> Result<()>;
}
