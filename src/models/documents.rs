//! Document models for the query glue
//!
//! Defines the wire shape of school and student documents.

use serde::{Deserialize, Serialize};

/// A school document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// School name
    pub name: String,
    /// Topics taught at the school
    #[serde(default)]
    pub topics: Vec<String>,
}

impl School {
    /// Creates a new School
    pub fn new(name: impl Into<String>, topics: &[&str]) -> Self {
        Self {
            name: name.into(),
            topics: topics.iter().map(|topic| topic.to_string()).collect(),
        }
    }
}

/// One row of the top-students aggregation.
///
/// Field names follow the wire form produced by the pipeline's `$group`
/// stage, hence the serde renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStudent {
    /// Student document id
    #[serde(rename = "_id")]
    pub id: serde_json::Value,
    /// Student name
    pub name: String,
    /// Average score across the student's topics
    #[serde(rename = "averageScore")]
    pub average_score: f64,
}
