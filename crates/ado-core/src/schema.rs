//! JSON projection of instructions with a stable, round-trippable field order.

use crate::model::AdoInstructions;
use anyhow::{Context, Result};

/// Serialize instructions to a pretty-printed JSON string.
///
/// Object fields follow struct declaration order, so serializing, parsing,
/// and serializing again yields identical bytes.
pub fn to_json(instructions: &AdoInstructions) -> Result<String> {
    serde_json::to_string_pretty(instructions).context("failed to serialize instructions to JSON")
}

/// Deserialize instructions from a JSON string.
pub fn from_json(json: &str) -> Result<AdoInstructions> {
    serde_json::from_str(json).context("failed to deserialize instructions from JSON")
}

/// Project instructions to a plain JSON value for transport.
pub fn to_value(instructions: &AdoInstructions) -> Result<serde_json::Value> {
    serde_json::to_value(instructions).context("failed to project instructions to a JSON value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdoInstructions, Priority, WorkItem, WorkItemKind};

    fn sample() -> AdoInstructions {
        let epic = WorkItem::new(WorkItemKind::Epic, "Epic: Demo", "desc", Priority::High);
        let mut task = WorkItem::new(WorkItemKind::Task, "Do the thing", "desc", Priority::Medium);
        task.parent_id = Some(epic.id.clone());
        AdoInstructions {
            project_name: "Demo".into(),
            work_items: vec![epic, task],
            organization_context: serde_json::json!({"name": "Omar Solutions"}),
        }
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let first = to_json(&sample()).unwrap();
        let reparsed = from_json(&first).unwrap();
        let second = to_json(&reparsed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wire_field_names() {
        let value = to_value(&sample()).unwrap();
        let item = &value["work_items"][0];
        assert_eq!(item["work_item_type"], "Epic");
        assert_eq!(item["priority"], "High");
        assert!(item["parent_id"].is_null());
        let task = &value["work_items"][1];
        assert_eq!(task["work_item_type"], "Task");
        assert!(task["parent_id"].is_string());
    }
}
