//! Structural validation of instruction payloads received for re-validation.
//!
//! Validation reports every problem it finds as an itemized issue list and
//! never repairs the payload. A string that is not JSON at all is the
//! distinct "cannot process" condition raised by [`parse_instructions`],
//! not a validation issue.

use crate::error::CoreError;
use serde_json::Value;
use std::collections::HashSet;

const KNOWN_KINDS: &[&str] = &["Epic", "Task", "User Story", "Bug"];
const KNOWN_PRIORITIES: &[&str] = &["Low", "Medium", "High", "Critical"];
const ITEM_REQUIRED_FIELDS: &[&str] = &[
    "id",
    "title",
    "work_item_type",
    "description",
    "priority",
    "tags",
];

/// Parse an instructions payload, failing with the "cannot process"
/// condition when the input is not JSON at all.
pub fn parse_instructions(json: &str) -> Result<Value, CoreError> {
    serde_json::from_str(json).map_err(CoreError::invalid)
}

/// Validate the structure of a parsed instructions payload.
///
/// Returns an itemized list of issues; an empty list means the structure is
/// valid. Checks required fields, known kind/priority labels, and the
/// parent invariants: Epics carry no `parent_id`, and every `parent_id`
/// present resolves to an Epic in the same collection.
pub fn validate_instructions(value: &Value) -> Vec<String> {
    let mut issues = Vec::new();

    let Some(root) = value.as_object() else {
        issues.push("Instructions payload must be a JSON object".to_string());
        return issues;
    };

    match root.get("project_name") {
        None => issues.push("Missing required field: project_name".to_string()),
        Some(Value::String(name)) if name.trim().is_empty() => {
            issues.push("Empty string for required field: project_name".to_string());
        }
        Some(Value::String(_)) => {}
        Some(_) => issues.push("Field project_name must be a string".to_string()),
    }

    let Some(items) = root.get("work_items") else {
        issues.push("Missing required field: work_items".to_string());
        return issues;
    };
    let Some(items) = items.as_array() else {
        issues.push("Field work_items must be an array".to_string());
        return issues;
    };

    // First pass: collect Epic ids so parent references can be resolved.
    let epic_ids: HashSet<&str> = items
        .iter()
        .filter(|item| item.get("work_item_type").and_then(Value::as_str) == Some("Epic"))
        .filter_map(|item| item.get("id").and_then(Value::as_str))
        .collect();

    for (index, item) in items.iter().enumerate() {
        let Some(fields) = item.as_object() else {
            issues.push(format!("Work item {index} must be an object"));
            continue;
        };

        for field in ITEM_REQUIRED_FIELDS {
            match fields.get(*field) {
                None => issues.push(format!("Work item {index} missing required field: {field}")),
                Some(Value::Null) => issues.push(format!(
                    "Work item {index} has null value for required field: {field}"
                )),
                Some(Value::String(s)) if s.trim().is_empty() => issues.push(format!(
                    "Work item {index} has empty string for required field: {field}"
                )),
                _ => {}
            }
        }

        if let Some(tags) = fields.get("tags")
            && !tags.is_array()
            && !tags.is_null()
        {
            issues.push(format!("Work item {index} field tags must be an array"));
        }

        let kind = fields.get("work_item_type").and_then(Value::as_str);
        if let Some(kind) = kind
            && !KNOWN_KINDS.contains(&kind)
        {
            issues.push(format!(
                "Work item {index} has unknown work_item_type: {kind}"
            ));
        }
        if let Some(priority) = fields.get("priority").and_then(Value::as_str)
            && !KNOWN_PRIORITIES.contains(&priority)
        {
            issues.push(format!("Work item {index} has unknown priority: {priority}"));
        }

        match kind {
            Some("Epic") => {
                if matches!(fields.get("parent_id"), Some(Value::String(_))) {
                    issues.push(format!("Epic at index {index} must not have a parent_id"));
                }
            }
            Some("Task") => match fields.get("parent_id") {
                Some(Value::String(parent)) => {
                    if !epic_ids.contains(parent.as_str()) {
                        issues.push(format!(
                            "Task at index {index} has parent_id that does not resolve to an Epic: {parent}"
                        ));
                    }
                }
                _ => issues.push(format!("Task at index {index} is missing a parent_id")),
            },
            _ => {
                if let Some(Value::String(parent)) = fields.get("parent_id")
                    && !epic_ids.contains(parent.as_str())
                {
                    issues.push(format!(
                        "Work item {index} has parent_id that does not resolve to an Epic: {parent}"
                    ));
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "project_name": "Demo",
            "work_items": [
                {
                    "id": "e1",
                    "title": "Epic: Demo",
                    "work_item_type": "Epic",
                    "description": "d",
                    "priority": "High",
                    "tags": ["epic"],
                    "parent_id": null
                },
                {
                    "id": "t1",
                    "title": "Implement Database Component",
                    "work_item_type": "Task",
                    "description": "d",
                    "priority": "Medium",
                    "tags": ["task"],
                    "parent_id": "e1"
                }
            ],
            "organization_context": {"name": "Omar Solutions"}
        })
    }

    #[test]
    fn test_valid_payload_has_no_issues() {
        assert!(validate_instructions(&valid_payload()).is_empty());
    }

    #[test]
    fn test_missing_project_name() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("project_name");
        let issues = validate_instructions(&payload);
        assert!(issues.iter().any(|i| i.contains("project_name")));
    }

    #[test]
    fn test_dangling_parent_reference() {
        let mut payload = valid_payload();
        payload["work_items"][1]["parent_id"] = json!("missing");
        let issues = validate_instructions(&payload);
        assert!(
            issues
                .iter()
                .any(|i| i.contains("does not resolve to an Epic")),
            "issues: {issues:?}"
        );
    }

    #[test]
    fn test_task_parent_must_be_epic_not_task() {
        let mut payload = valid_payload();
        // Point the task at another task's id
        payload["work_items"][1]["parent_id"] = json!("t1");
        let issues = validate_instructions(&payload);
        assert!(!issues.is_empty());
    }

    #[test]
    fn test_epic_with_parent_is_flagged() {
        let mut payload = valid_payload();
        payload["work_items"][0]["parent_id"] = json!("e1");
        let issues = validate_instructions(&payload);
        assert!(issues.iter().any(|i| i.contains("must not have a parent_id")));
    }

    #[test]
    fn test_task_without_parent_is_flagged() {
        let mut payload = valid_payload();
        payload["work_items"][1]["parent_id"] = json!(null);
        let issues = validate_instructions(&payload);
        assert!(issues.iter().any(|i| i.contains("missing a parent_id")));
    }

    #[test]
    fn test_unknown_labels_are_flagged() {
        let mut payload = valid_payload();
        payload["work_items"][1]["work_item_type"] = json!("Story");
        payload["work_items"][1]["priority"] = json!("Urgent");
        let issues = validate_instructions(&payload);
        assert!(issues.iter().any(|i| i.contains("unknown work_item_type")));
        assert!(issues.iter().any(|i| i.contains("unknown priority")));
    }

    #[test]
    fn test_not_json_is_cannot_process() {
        let err = parse_instructions("not json at all").unwrap_err();
        assert!(err.to_string().contains("cannot process"));
    }

    #[test]
    fn test_issues_are_itemized_not_merged() {
        let mut payload = valid_payload();
        payload["work_items"][1]
            .as_object_mut()
            .unwrap()
            .remove("title");
        payload["work_items"][1]["parent_id"] = json!("missing");
        let issues = validate_instructions(&payload);
        assert!(issues.len() >= 2, "issues: {issues:?}");
    }
}
