//! School Queries Module
//!
//! Pass-through queries over a school collection: listing, insertion,
//! topic updates, topic search, and the top-students aggregation.

use serde_json::json;

use crate::error::Result;
use crate::models::{School, TopStudent};
use crate::queries::{Document, DocumentCollection};

// == List All ==
/// Lists every document in the collection.
pub fn list_all(collection: &dyn DocumentCollection) -> Result<Vec<Document>> {
    collection.find(&json!({}))
}

// == Insert School ==
/// Inserts a school document.
///
/// # Returns
/// The generated document id.
pub fn insert_school(collection: &dyn DocumentCollection, school: &School) -> Result<String> {
    let document = serde_json::to_value(school)?;
    collection.insert_one(document)
}

// == Update Topics ==
/// Replaces the topics of every school with the given name.
///
/// # Returns
/// The number of matched documents.
pub fn update_topics(
    collection: &dyn DocumentCollection,
    name: &str,
    topics: &[String],
) -> Result<u64> {
    collection.update_many(&json!({ "name": name }), &json!({ "$set": { "topics": topics } }))
}

// == Schools By Topic ==
/// Finds every school whose topics contain the given topic.
pub fn schools_by_topic(
    collection: &dyn DocumentCollection,
    topic: &str,
) -> Result<Vec<Document>> {
    collection.find(&json!({ "topics": { "$all": [topic] } }))
}

// == Top Students ==
/// Returns all students sorted by average score, descending.
///
/// Unwinds each student's topics, averages the per-topic scores, and
/// sorts on the average.
pub fn top_students(collection: &dyn DocumentCollection) -> Result<Vec<TopStudent>> {
    let pipeline = [
        json!({ "$unwind": "$topics" }),
        json!({
            "$group": {
                "_id": "$_id",
                "name": { "$first": "$name" },
                "averageScore": { "$avg": "$topics.score" },
            }
        }),
        json!({ "$sort": { "averageScore": -1 } }),
    ];

    let documents = collection.aggregate(&pipeline)?;
    documents
        .into_iter()
        .map(|doc| serde_json::from_value(doc).map_err(Into::into))
        .collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testing::RecordingCollection;

    #[test]
    fn test_list_all_uses_empty_filter() {
        let collection = RecordingCollection::default();

        let result = list_all(&collection).unwrap();

        assert!(result.is_empty());
        assert_eq!(*collection.find_calls.lock(), vec![json!({})]);
    }

    #[test]
    fn test_insert_school_document_shape() {
        let collection = RecordingCollection::default();
        let school = School::new("Holberton", &["Algo", "C"]);

        let id = insert_school(&collection, &school).unwrap();

        assert_eq!(id, "generated-id");
        assert_eq!(
            *collection.insert_calls.lock(),
            vec![json!({ "name": "Holberton", "topics": ["Algo", "C"] })]
        );
    }

    #[test]
    fn test_update_topics_filter_and_update() {
        let collection = RecordingCollection::default();
        let topics = vec!["Sys admin".to_string(), "AI".to_string()];

        let matched = update_topics(&collection, "Holberton", &topics).unwrap();

        assert_eq!(matched, 1);
        assert_eq!(
            *collection.update_calls.lock(),
            vec![(
                json!({ "name": "Holberton" }),
                json!({ "$set": { "topics": ["Sys admin", "AI"] } }),
            )]
        );
    }

    #[test]
    fn test_schools_by_topic_filter() {
        let collection = RecordingCollection::default();

        schools_by_topic(&collection, "Python").unwrap();

        assert_eq!(
            *collection.find_calls.lock(),
            vec![json!({ "topics": { "$all": ["Python"] } })]
        );
    }

    #[test]
    fn test_top_students_pipeline_shape() {
        let collection = RecordingCollection::default();

        top_students(&collection).unwrap();

        let pipelines = collection.aggregate_calls.lock();
        assert_eq!(pipelines.len(), 1);

        let pipeline = &pipelines[0];
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[0], json!({ "$unwind": "$topics" }));
        assert_eq!(
            pipeline[1],
            json!({
                "$group": {
                    "_id": "$_id",
                    "name": { "$first": "$name" },
                    "averageScore": { "$avg": "$topics.score" },
                }
            })
        );
        assert_eq!(pipeline[2], json!({ "$sort": { "averageScore": -1 } }));
    }

    #[test]
    fn test_top_students_deserializes_rows() {
        let collection = RecordingCollection {
            aggregate_result: vec![
                json!({ "_id": "1", "name": "Julia", "averageScore": 14.5 }),
                json!({ "_id": "2", "name": "Bob", "averageScore": 10.0 }),
            ],
            ..Default::default()
        };

        let students = top_students(&collection).unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Julia");
        assert_eq!(students[0].average_score, 14.5);
        assert_eq!(students[1].name, "Bob");
    }

    #[test]
    fn test_top_students_malformed_row() {
        let collection = RecordingCollection {
            aggregate_result: vec![json!({ "_id": "1" })],
            ..Default::default()
        };

        assert!(top_students(&collection).is_err());
    }
}
