//! Collaborator-supplied feature records and their hierarchy projection.
//!
//! Feature records arrive from an external analysis step (e.g. a vision
//! model reading a workflow diagram). The engine never performs that
//! analysis itself; it only projects the records it is handed into the
//! single-Epic hierarchy a diagram describes.

use crate::text;
use ado_core::config::AdoConfig;
use ado_core::model::{AdoInstructions, Priority, WorkItem, WorkItemKind};
use serde::Deserialize;

/// One feature descriptor received from the analysis collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Priority label, parsed leniently; unknown labels fall back to a
    /// default per item kind.
    #[serde(default)]
    pub priority: String,
    /// Marks the workflow root. When absent, the first record is taken.
    #[serde(default)]
    pub is_main_epic: bool,
    #[serde(default)]
    pub requirements: Vec<RequirementRecord>,
}

/// One sequential step inside a feature record.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
}

const DEFAULT_EPIC_DESCRIPTION: &str =
    "Main workflow implementation based on dependency analysis. All workflow steps are \
     integrated in sequence and dependencies are implemented in the order shown.";

/// Project collaborator records into a single-Epic hierarchy.
///
/// The first record flagged `is_main_epic` (or simply the first record)
/// becomes the Epic; its requirements become sequential Tasks parented to
/// it. Remaining records are ignored: workflow analysis yields one Epic per
/// diagram. Empty records yield an empty work-item list.
pub fn build_from_records(
    records: &[FeatureRecord],
    project_name: &str,
    config: &AdoConfig,
) -> AdoInstructions {
    let mut work_items: Vec<WorkItem> = Vec::new();

    let main = records
        .iter()
        .find(|record| record.is_main_epic)
        .or_else(|| records.first());

    if let Some(record) = main {
        let description = if record.description.trim().is_empty() {
            DEFAULT_EPIC_DESCRIPTION.to_string()
        } else {
            text::normalize(&record.description)
        };
        let mut epic = WorkItem::new(
            WorkItemKind::Epic,
            text::normalize(&record.name),
            description,
            Priority::parse(&record.priority).unwrap_or(Priority::High),
        );
        epic.push_tag("workflow");
        epic.push_tag("dependency-chain");
        epic.push_tag("epic");
        let epic_id = epic.id.clone();
        work_items.push(epic);

        let total = record.requirements.len();
        for (index, requirement) in record.requirements.iter().enumerate() {
            let title = if requirement.title.trim().is_empty() {
                format!("Workflow Step {}", index + 1)
            } else {
                text::normalize(&requirement.title)
            };
            let description = format!(
                "{}\n\nWorkflow Step {} of {total}\n\
                 Acceptance Criteria: implementation follows the workflow dependencies, \
                 integration with the previous step is verified, and tests cover the step.",
                text::normalize(&requirement.description),
                index + 1,
            );
            let mut task = WorkItem::new(
                WorkItemKind::Task,
                title,
                description,
                Priority::parse(&requirement.priority).unwrap_or(Priority::Medium),
            );
            task.parent_id = Some(epic_id.clone());
            task.push_tag("workflow-step");
            task.push_tag("dependency-task");
            task.push_tag(format!("step-{}", index + 1));
            work_items.push(task);
        }
    }

    let resolved_project = if project_name.is_empty() {
        "Workflow Analysis Project".to_string()
    } else {
        project_name.to_string()
    };

    AdoInstructions {
        project_name: resolved_project,
        work_items,
        organization_context: config.organization_value(),
    }
}
