//! Shared response envelope types for API handlers.
//!
//! Every successful response is `{ "message": ..., "data": ... }`. Entities
//! serialize as flat snake_case objects (audit columns are flattened into
//! them by the model types), collections as arrays, and an absent entity as
//! an empty array.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// The `data` member of an [`Envelope`].
#[derive(Debug)]
pub enum Payload<T> {
    /// One entity, rendered as a JSON object.
    Entity(T),
    /// Zero or more entities, rendered as a JSON array (`[]` when empty).
    Collection(Vec<T>),
    /// No entity, rendered as `[]` rather than `null`.
    Absent,
}

impl<T: Serialize> Serialize for Payload<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Entity(entity) => entity.serialize(serializer),
            Payload::Collection(items) => items.serialize(serializer),
            Payload::Absent => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

/// Standard `{ "message": String, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::collection("Projects retrieved successfully", projects)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    pub data: Payload<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn entity(message: &'static str, entity: T) -> Self {
        Self {
            message,
            data: Payload::Entity(entity),
        }
    }

    pub fn collection(message: &'static str, items: Vec<T>) -> Self {
        Self {
            message,
            data: Payload::Collection(items),
        }
    }

    pub fn absent(message: &'static str) -> Self {
        Self {
            message,
            data: Payload::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Meta {
        id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        deleted_at: Option<String>,
    }

    #[derive(Serialize)]
    struct Item {
        #[serde(flatten)]
        meta: Meta,
        project_id: i64,
        title: &'static str,
    }

    fn item(id: i64) -> Item {
        Item {
            meta: Meta {
                id,
                deleted_at: None,
            },
            project_id: 7,
            title: "Tasks",
        }
    }

    #[test]
    fn entity_is_flat_object() {
        let value = serde_json::to_value(Envelope::entity("List created successfully", item(1)))
            .unwrap();
        assert_eq!(
            value,
            json!({
                "message": "List created successfully",
                "data": { "id": 1, "project_id": 7, "title": "Tasks" }
            })
        );
    }

    #[test]
    fn empty_collection_is_empty_array() {
        let value =
            serde_json::to_value(Envelope::<Item>::collection("Lists retrieved successfully", vec![]))
                .unwrap();
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["message"], "Lists retrieved successfully");
    }

    #[test]
    fn collection_is_array_of_flat_objects() {
        let value =
            serde_json::to_value(Envelope::collection("ok", vec![item(1), item(2)])).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1]["id"], 2);
        assert!(data[0].get("meta").is_none());
    }

    #[test]
    fn absent_entity_is_empty_array_not_null() {
        let value = serde_json::to_value(Envelope::<Item>::absent("ok")).unwrap();
        assert_eq!(value["data"], json!([]));
    }

    #[test]
    fn deleted_at_only_when_set() {
        let mut deleted = item(3);
        deleted.meta.deleted_at = Some("2024-01-01T00:00:00Z".into());

        let live = serde_json::to_value(Envelope::entity("ok", item(3))).unwrap();
        let gone = serde_json::to_value(Envelope::entity("ok", deleted)).unwrap();
        assert!(live["data"].get("deleted_at").is_none());
        assert_eq!(gone["data"]["deleted_at"], "2024-01-01T00:00:00Z");
    }
}
