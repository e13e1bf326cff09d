//! Data model for Azure DevOps work-item instructions.
//!
//! Work items form a flat, ordered arena: parent/child relations are id
//! references into the same collection, never structural pointers, so the
//! hierarchy serializes flat and cannot form ownership cycles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of work item in the Epic/Task hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkItemKind {
    Epic,
    Task,
    #[serde(rename = "User Story")]
    UserStory,
    Bug,
}

impl WorkItemKind {
    /// The wire label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            Self::Epic => "Epic",
            Self::Task => "Task",
            Self::UserStory => "User Story",
            Self::Bug => "Bug",
        }
    }
}

/// Priority tier for a work item, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Lenient, case-insensitive parse used for caller overrides and
    /// collaborator records. Unknown labels yield `None` so callers can fall
    /// back to the original value instead of failing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// The wire label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// A single Azure DevOps work item.
///
/// Field order matters: serialization follows declaration order and the
/// projection must round-trip byte-identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub title: String,
    #[serde(rename = "work_item_type")]
    pub kind: WorkItemKind,
    pub description: String,
    pub priority: Priority,
    /// Insertion-ordered tag set; use [`WorkItem::push_tag`] to keep it
    /// duplicate-free.
    pub tags: Vec<String>,
    /// `None` for Epics; for Tasks, the id of the owning Epic.
    pub parent_id: Option<String>,
}

impl WorkItem {
    /// Create a new work item with a fresh unique id, no tags, and no parent.
    pub fn new(
        kind: WorkItemKind,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            description: description.into(),
            priority,
            tags: Vec::new(),
            parent_id: None,
        }
    }

    /// Append a tag unless it is already present; insertion order is kept.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.iter().any(|t| *t == tag) {
            self.tags.push(tag);
        }
    }
}

/// A complete set of work-item instructions for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoInstructions {
    pub project_name: String,
    /// Flat ordered arena: Epics appear before their Tasks.
    pub work_items: Vec<WorkItem>,
    /// Opaque descriptive payload threaded through from configuration,
    /// never inspected or modified by the synthesis core.
    pub organization_context: serde_json::Value,
}

impl AdoInstructions {
    /// All Epic work items, in collection order.
    pub fn epics(&self) -> impl Iterator<Item = &WorkItem> {
        self.work_items
            .iter()
            .filter(|item| item.kind == WorkItemKind::Epic)
    }

    /// All Task work items, in collection order.
    pub fn tasks(&self) -> impl Iterator<Item = &WorkItem> {
        self.work_items
            .iter()
            .filter(|item| item.kind == WorkItemKind::Task)
    }

    /// Tasks parented to the given Epic id, in collection order.
    pub fn tasks_of<'a>(&'a self, epic_id: &'a str) -> impl Iterator<Item = &'a WorkItem> {
        self.tasks()
            .filter(move |task| task.parent_id.as_deref() == Some(epic_id))
    }

    /// Look up a work item by id.
    pub fn find(&self, id: &str) -> Option<&WorkItem> {
        self.work_items.iter().find(|item| item.id == id)
    }
}
