//! Queries Module
//!
//! Thin pass-through glue over a generic document collection: filters,
//! updates, aggregation pipelines, and log statistics.

mod collection;
mod logstats;
mod schools;

// Re-export public types
pub use collection::{Document, DocumentCollection};
pub use logstats::{log_stats, LogReport, MethodCount, TRACKED_METHODS};
pub use schools::{
    insert_school, list_all, schools_by_topic, top_students, update_topics,
};

// == Test Support ==
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use parking_lot::Mutex;
    use serde_json::Value;

    use super::{Document, DocumentCollection};
    use crate::error::Result;

    /// Collection fake that records every call and serves canned results.
    #[derive(Default)]
    pub struct RecordingCollection {
        pub find_calls: Mutex<Vec<Document>>,
        pub insert_calls: Mutex<Vec<Document>>,
        pub update_calls: Mutex<Vec<(Document, Document)>>,
        pub aggregate_calls: Mutex<Vec<Vec<Document>>>,
        pub count_calls: Mutex<Vec<Document>>,
        pub find_result: Vec<Document>,
        pub aggregate_result: Vec<Document>,
        /// Counts served per filter, keyed by the filter's JSON text
        pub counts: HashMap<String, u64>,
    }

    impl DocumentCollection for RecordingCollection {
        fn find(&self, filter: &Document) -> Result<Vec<Document>> {
            self.find_calls.lock().push(filter.clone());
            Ok(self.find_result.clone())
        }

        fn insert_one(&self, document: Document) -> Result<String> {
            self.insert_calls.lock().push(document);
            Ok("generated-id".to_string())
        }

        fn update_many(&self, filter: &Document, update: &Document) -> Result<u64> {
            self.update_calls.lock().push((filter.clone(), update.clone()));
            Ok(1)
        }

        fn aggregate(&self, pipeline: &[Document]) -> Result<Vec<Document>> {
            self.aggregate_calls.lock().push(pipeline.to_vec());
            Ok(self.aggregate_result.clone())
        }

        fn count_documents(&self, filter: &Document) -> Result<u64> {
            self.count_calls.lock().push(filter.clone());
            Ok(*self.counts.get(&filter.to_string()).unwrap_or(&0))
        }
    }

    /// Shorthand for seeding per-filter counts.
    pub fn count_for(filter: Value, count: u64) -> (String, u64) {
        (filter.to_string(), count)
    }
}
