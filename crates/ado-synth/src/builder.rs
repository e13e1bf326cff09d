//! Epic/Task hierarchy construction from extracted features and chain info.

use crate::chain::DependencyChainResult;
use crate::priority;
use crate::template::{self, Category};
use ado_core::model::{Priority, WorkItem, WorkItemKind};

/// Features containing any of these keywords get their own Epic; the rest
/// become Tasks under the first Epic.
const MAJOR_FEATURE_KEYWORDS: &[&str] = &[
    "build",
    "create",
    "develop",
    "chatbot",
    "website",
    "application",
    "system",
    "platform",
];

/// Tag slug for a project name: lowercased, spaces to dashes.
fn project_slug(project_name: &str) -> String {
    project_name.to_lowercase().replace(' ', "-")
}

/// Create an Epic work item from a feature description.
pub fn epic_from_feature(feature: &str, project_name: &str) -> WorkItem {
    let project = if project_name.is_empty() {
        "Project"
    } else {
        project_name
    };

    let title_feature = feature
        .replace("Build ", "")
        .replace("Create ", "")
        .replace("Develop ", "");

    let mut epic = WorkItem::new(
        WorkItemKind::Epic,
        format!("Epic: {title_feature}"),
        template::epic_description(feature),
        priority::classify(feature),
    );
    epic.push_tag("epic");
    epic.push_tag("feature");
    epic.push_tag(project_slug(project));
    epic
}

/// Create a Task work item from a requirement, parented to an Epic.
pub fn task_from_requirement(requirement: &str, epic_id: &str, project_name: &str) -> WorkItem {
    let title = requirement.replace("Need a ", "").replace("Need ", "");
    let category = Category::detect(requirement);

    let mut task = WorkItem::new(
        WorkItemKind::Task,
        title,
        template::task_description(requirement, category),
        priority::for_task(requirement),
    );
    task.parent_id = Some(epic_id.to_string());
    task.push_tag("task");
    if !project_name.is_empty() {
        task.push_tag(project_slug(project_name));
    }
    for tag in category.tags() {
        task.push_tag(*tag);
    }
    task
}

/// Build the complete work-item sequence from features and chain info.
///
/// Chain path: one Epic from the root concept, one `Implement <step>
/// Component` Task per step, in step order. Fallback path: one Epic per
/// major feature (or a synthetic project Epic when only minor features
/// exist), with every minor feature parented to the first Epic only. Empty
/// features yield an empty sequence, never an error.
pub fn build_work_items(
    features: &[String],
    chain: &DependencyChainResult,
    project_name: &str,
) -> Vec<WorkItem> {
    if features.is_empty() {
        return Vec::new();
    }

    if chain.is_chain {
        let epic = epic_from_feature(&chain.root_concept, project_name);
        let epic_id = epic.id.clone();
        let mut items = vec![epic];
        for step in &chain.steps {
            items.push(task_from_requirement(
                &format!("Implement {step} Component"),
                &epic_id,
                project_name,
            ));
        }
        return items;
    }

    let (major, minor): (Vec<&String>, Vec<&String>) = features.iter().partition(|feature| {
        let lower = feature.to_lowercase();
        MAJOR_FEATURE_KEYWORDS
            .iter()
            .any(|keyword| lower.contains(keyword))
    });

    let mut items = Vec::new();
    let mut epic_ids = Vec::new();

    for feature in &major {
        let epic = epic_from_feature(feature.as_str(), project_name);
        epic_ids.push(epic.id.clone());
        items.push(epic);
    }

    if major.is_empty() && !minor.is_empty() {
        let label = if project_name.is_empty() {
            "Project Development".to_string()
        } else {
            format!("{project_name} Development")
        };
        let epic = epic_from_feature(&label, "");
        epic_ids.push(epic.id.clone());
        items.push(epic);
    }

    // Minor features attach to the first Epic only, never distributed
    if let Some(parent_id) = epic_ids.first() {
        for feature in &minor {
            items.push(task_from_requirement(feature.as_str(), parent_id, project_name));
        }
    }

    items
}

/// Uniformly overwrite every item's priority when the override parses.
/// Invalid values are silently ignored and the original priorities kept.
pub fn apply_priority_override(items: &mut [WorkItem], raw: &str) {
    if let Some(priority) = Priority::parse(raw) {
        for item in items {
            item.priority = priority;
        }
    }
}
