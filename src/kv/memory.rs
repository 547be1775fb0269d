//! In-Memory Store Module
//!
//! HashMap-backed implementation of the KeyValueStore trait with
//! scalar and list records.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::kv::KeyValueStore;

// == Record ==
/// A single stored record.
///
/// Keys are typed: a key holds either a scalar byte value or an ordered
/// list, never both. Operations that expect the other kind fail with
/// `CacheError::WrongType`.
#[derive(Debug, Clone)]
enum Record {
    /// Raw scalar bytes
    Value(Vec<u8>),
    /// Ordered list of byte values
    List(Vec<Vec<u8>>),
}

// == Memory Store ==
/// In-memory key-value store.
///
/// All state lives behind a single RwLock, so a shared handle can be used
/// from plain `&self` methods. List appends take the write lock for the
/// whole operation, which serializes them in submission order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-record storage
    records: RwLock<HashMap<String, Record>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of keys in the store.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut records = self.records.write();
        records.insert(key.to_string(), Record::Value(value.to_vec()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let records = self.records.read();
        match records.get(key) {
            Some(Record::Value(bytes)) => Ok(Some(bytes.clone())),
            Some(Record::List(_)) => Err(CacheError::WrongType(key.to_string())),
            None => Ok(None),
        }
    }

    fn incr_by(&self, key: &str, delta: i64) -> Result<i64> {
        let mut records = self.records.write();

        // Absent counters start at zero
        let current = match records.get(key) {
            Some(Record::Value(bytes)) => parse_counter(key, bytes)?,
            Some(Record::List(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => 0,
        };

        let updated = current + delta;
        records.insert(
            key.to_string(),
            Record::Value(updated.to_string().into_bytes()),
        );
        Ok(updated)
    }

    fn rpush(&self, key: &str, value: &[u8]) -> Result<usize> {
        let mut records = self.records.write();

        match records.get_mut(key) {
            Some(Record::List(items)) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Some(Record::Value(_)) => Err(CacheError::WrongType(key.to_string())),
            None => {
                records.insert(key.to_string(), Record::List(vec![value.to_vec()]));
                Ok(1)
            }
        }
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let records = self.records.read();

        let items = match records.get(key) {
            Some(Record::List(items)) => items,
            Some(Record::Value(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => return Ok(Vec::new()),
        };

        let len = items.len() as i64;
        let first = normalize_index(start, len);
        let last = normalize_index(stop, len);

        if first > last || first >= len {
            return Ok(Vec::new());
        }

        // Indices are clamped to the list bounds, so the slice is in range
        let last = last.min(len - 1);
        Ok(items[first as usize..=last as usize].to_vec())
    }

    fn flush_all(&self) -> Result<()> {
        let mut records = self.records.write();
        let flushed = records.len();
        records.clear();
        debug!(flushed, "store flushed");
        Ok(())
    }
}

// == Utility Functions ==
/// Parses a counter record as a decimal integer.
fn parse_counter(key: &str, bytes: &[u8]) -> Result<i64> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| CacheError::Conversion(format!("counter '{}' is not UTF-8", key)))?;
    text.parse().map_err(|_| {
        CacheError::Conversion(format!("counter '{}' is not an integer: {:?}", key, text))
    })
}

/// Converts a possibly negative Redis-style index into a clamped offset.
fn normalize_index(index: i64, len: i64) -> i64 {
    if index < 0 {
        (len + index).max(0)
    } else {
        index
    }
}
