//! Call Tracker Module
//!
//! Composes observers into a chain and applies them around cache
//! operations.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{Cache, StoredValue};
use crate::config::Config;
use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::tracking::{CallCounter, CallObserver, HistoryRecorder};

// == Operation Names ==
/// Operation name under which tracked stores are counted and recorded.
pub const STORE_OPERATION: &str = "Cache.store";

// == Call Tracker ==
/// An ordered chain of call observers.
///
/// Observers run in composition order: `on_call` hooks fire front to back
/// before the operation executes, `on_return` hooks fire front to back
/// after it returns successfully. The standard composition puts the
/// counter first and the history recorder second, so a call that fails
/// mid-operation still counts and still records its input.
#[derive(Default)]
pub struct CallTracker {
    observers: Vec<Box<dyn CallObserver>>,
}

impl CallTracker {
    // == Constructors ==
    /// Creates a tracker with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard tracker for a store connection.
    ///
    /// Composition follows the config: counting first when enabled, then
    /// history recording when enabled.
    pub fn for_store(store: &Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let mut tracker = Self::new();
        if config.count_calls {
            tracker = tracker.with_observer(Box::new(CallCounter::new(Arc::clone(store))));
        }
        if config.record_history {
            tracker = tracker.with_observer(Box::new(HistoryRecorder::new(Arc::clone(store))));
        }
        tracker
    }

    /// Appends an observer to the chain.
    pub fn with_observer(mut self, observer: Box<dyn CallObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    // == Observe ==
    /// Runs an operation under observation.
    ///
    /// `args` is the pre-rendered argument representation; the successful
    /// output is rendered with `render_output` before recording. The
    /// operation's result (or error) passes through unchanged.
    pub fn observe<T>(
        &self,
        operation: &str,
        args: &str,
        run: impl FnOnce() -> Result<T>,
        render_output: impl FnOnce(&T) -> String,
    ) -> Result<T> {
        for observer in &self.observers {
            observer.on_call(operation, args)?;
        }

        let output = run()?;

        let rendered = render_output(&output);
        for observer in &self.observers {
            observer.on_return(operation, &rendered)?;
        }

        debug!(operation, "tracked call completed");
        Ok(output)
    }
}

// == Tracked Cache ==
/// A cache whose observable operations run under a call tracker.
///
/// Wrapping preserves the cache's visible contract exactly; the tracker's
/// side effects are confined to the store's tracking keys. Reads pass
/// through untracked.
pub struct TrackedCache {
    cache: Cache,
    tracker: CallTracker,
}

impl TrackedCache {
    // == Constructor ==
    /// Wraps a cache with a tracker.
    pub fn new(cache: Cache, tracker: CallTracker) -> Self {
        Self { cache, tracker }
    }

    /// Builds the standard tracked cache for a store connection.
    pub fn for_store(store: Arc<dyn KeyValueStore>, config: &Config) -> Result<Self> {
        let tracker = CallTracker::for_store(&store, config);
        let cache = Cache::initialize(store)?;
        Ok(Self::new(cache, tracker))
    }

    // == Store ==
    /// Stores a value, tracked under `Cache.store`.
    pub fn store(&self, data: &StoredValue) -> Result<String> {
        self.tracker.observe(
            STORE_OPERATION,
            &data.render(),
            || self.cache.store(data),
            |key| key.clone(),
        )
    }

    // == Untracked Reads ==
    /// Retrieves the raw bytes for a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.cache.get_raw(key)
    }

    /// Retrieves a value decoded as UTF-8 text.
    pub fn get_text(&self, key: &str) -> Result<Option<String>> {
        self.cache.get_text(key)
    }

    /// Retrieves a value parsed as a decimal integer.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.cache.get_int(key)
    }

    /// Returns the wrapped cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::kv::MemoryStore;
    use crate::tracking::{inputs_key, outputs_key};

    fn new_store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_tracked_store_counts_and_records() {
        let store = new_store();
        let tracked = TrackedCache::for_store(Arc::clone(&store), &Config::default()).unwrap();

        let key = tracked.store(&StoredValue::from("a")).unwrap();

        assert_eq!(store.get(STORE_OPERATION).unwrap(), Some(b"1".to_vec()));

        let inputs = store.lrange(&inputs_key(STORE_OPERATION), 0, -1).unwrap();
        let outputs = store.lrange(&outputs_key(STORE_OPERATION), 0, -1).unwrap();
        assert_eq!(inputs, vec![b"\"a\"".to_vec()]);
        assert_eq!(outputs, vec![key.into_bytes()]);
    }

    #[test]
    fn test_tracked_store_preserves_contract() {
        let store = new_store();
        let tracked = TrackedCache::for_store(Arc::clone(&store), &Config::default()).unwrap();

        let key = tracked.store(&StoredValue::from("Hello")).unwrap();

        assert_eq!(tracked.get_text(&key).unwrap(), Some("Hello".to_string()));
    }

    #[test]
    fn test_counter_moves_once_per_call() {
        let store = new_store();
        let tracked = TrackedCache::for_store(Arc::clone(&store), &Config::default()).unwrap();

        for _ in 0..5 {
            tracked.store(&StoredValue::from("x")).unwrap();
        }

        let count = store.incr_by(STORE_OPERATION, 0).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_counting_disabled_still_records_history() {
        let store = new_store();
        let config = Config {
            count_calls: false,
            record_history: true,
        };
        let tracked = TrackedCache::for_store(Arc::clone(&store), &config).unwrap();

        tracked.store(&StoredValue::from("a")).unwrap();

        assert_eq!(store.get(STORE_OPERATION).unwrap(), None);
        assert_eq!(
            store.lrange(&inputs_key(STORE_OPERATION), 0, -1).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_history_disabled_still_counts() {
        let store = new_store();
        let config = Config {
            count_calls: true,
            record_history: false,
        };
        let tracked = TrackedCache::for_store(Arc::clone(&store), &config).unwrap();

        tracked.store(&StoredValue::from("a")).unwrap();

        assert_eq!(store.get(STORE_OPERATION).unwrap(), Some(b"1".to_vec()));
        assert!(store
            .lrange(&inputs_key(STORE_OPERATION), 0, -1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_failed_call_counts_and_skips_output() {
        let store = new_store();
        let tracker = CallTracker::for_store(&store, &Config::default());

        let result: Result<String> = tracker.observe(
            "op",
            "\"a\"",
            || Err(CacheError::Conversion("boom".to_string())),
            |out: &String| out.clone(),
        );
        assert!(result.is_err());

        // Counter and input recorded before the failure, output skipped
        assert_eq!(store.get("op").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.lrange(&inputs_key("op"), 0, -1).unwrap().len(), 1);
        assert!(store.lrange(&outputs_key("op"), 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_empty_tracker_is_a_no_op() {
        let store = new_store();
        let cache = Cache::initialize(Arc::clone(&store)).unwrap();
        let tracked = TrackedCache::new(cache, CallTracker::new());

        let key = tracked.store(&StoredValue::from("a")).unwrap();

        assert_eq!(tracked.get_text(&key).unwrap(), Some("a".to_string()));
        assert_eq!(store.get(STORE_OPERATION).unwrap(), None);
    }
}
