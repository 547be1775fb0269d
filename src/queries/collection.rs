//! Document Collection Module
//!
//! The document-store surface the query glue consumes.

use crate::error::Result;

// == Document ==
/// A document, filter, update, or pipeline stage in wire form.
pub type Document = serde_json::Value;

// == Document Collection Trait ==
/// The document-store operations the query glue relies on.
///
/// Every function in this module is a thin pass-through: it builds the
/// filter, update, or pipeline and delegates here. Query execution lives
/// entirely on the other side of this seam.
pub trait DocumentCollection: Send + Sync {
    /// Returns every document matching the filter.
    fn find(&self, filter: &Document) -> Result<Vec<Document>>;

    /// Inserts one document and returns its generated id.
    fn insert_one(&self, document: Document) -> Result<String>;

    /// Applies an update to every document matching the filter.
    ///
    /// # Returns
    /// The number of matched documents.
    fn update_many(&self, filter: &Document, update: &Document) -> Result<u64>;

    /// Runs an aggregation pipeline and returns the resulting documents.
    fn aggregate(&self, pipeline: &[Document]) -> Result<Vec<Document>>;

    /// Counts the documents matching the filter.
    fn count_documents(&self, filter: &Document) -> Result<u64>;
}
