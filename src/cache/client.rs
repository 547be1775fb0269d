//! Cache Client Module
//!
//! Randomly-keyed cache over a shared KeyValueStore handle.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::cache::StoredValue;
use crate::error::{CacheError, Result};
use crate::kv::KeyValueStore;

// == Cache ==
/// Cache client for storing and retrieving randomly-keyed values.
///
/// The cache exclusively owns its store handle after initialization; the
/// handle itself is the process-wide connection value, constructed once
/// and passed in.
pub struct Cache {
    /// Shared store connection
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    // == Initialize ==
    /// Initializes the cache over a store connection.
    ///
    /// Flushes every existing key, so any prior cache content and tracking
    /// state is destroyed. A flush failure is fatal and propagated, never
    /// retried.
    pub fn initialize(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        store
            .flush_all()
            .map_err(|e| CacheError::Connection(e.to_string()))?;
        debug!("cache initialized, store flushed");
        Ok(Self { store })
    }

    // == Store ==
    /// Stores a value under a freshly generated key.
    ///
    /// Keys are random UUID-v4 strings; collision with an existing key is
    /// treated as negligible, so there is no duplicate-key error path.
    ///
    /// # Returns
    /// The generated key.
    pub fn store(&self, data: &StoredValue) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        self.store.set(&key, &data.to_bytes())?;
        debug!(%key, "value stored");
        Ok(key)
    }

    // == Get ==
    /// Retrieves a value and applies a converter to the raw bytes.
    ///
    /// An absent key is `None`, never an error. A converter failure
    /// propagates to the caller unchanged.
    pub fn get<T>(
        &self,
        key: &str,
        convert: impl FnOnce(Vec<u8>) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(convert(bytes)?)),
            None => Ok(None),
        }
    }

    // == Get Raw ==
    /// Retrieves the raw bytes for a key without conversion.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get(key, Ok)
    }

    // == Get Text ==
    /// Retrieves a value decoded as UTF-8 text.
    pub fn get_text(&self, key: &str) -> Result<Option<String>> {
        self.get(key, |bytes| {
            String::from_utf8(bytes)
                .map_err(|_| CacheError::Conversion(format!("value for '{}' is not UTF-8", key)))
        })
    }

    // == Get Integer ==
    /// Retrieves a value parsed as a decimal integer.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get(key, |bytes| {
            std::str::from_utf8(&bytes)
                .ok()
                .and_then(|text| text.parse().ok())
                .ok_or_else(|| {
                    CacheError::Conversion(format!("value for '{}' is not an integer", key))
                })
        })
    }

    // == Store Handle ==
    /// Returns the shared store connection.
    pub fn store_handle(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }
}
