//! Human-readable summaries of generated work items. Pure formatting, no
//! decisions.

use ado_core::model::{AdoInstructions, WorkItem};

/// Structure statistics for a set of instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QuickStats {
    pub(crate) epics: usize,
    pub(crate) tasks: usize,
    pub(crate) total: usize,
    /// One Epic with at least one dependent Task, the shape a workflow
    /// diagram should produce.
    pub(crate) proper_chain: bool,
}

pub(crate) fn quick_stats(instructions: &AdoInstructions) -> QuickStats {
    let epics = instructions.epics().count();
    let tasks = instructions.tasks().count();
    QuickStats {
        epics,
        tasks,
        total: instructions.work_items.len(),
        proper_chain: epics == 1 && tasks > 0,
    }
}

/// Format the Epic/Task hierarchy as a review summary.
pub(crate) fn format_summary(instructions: &AdoInstructions, title: &str) -> String {
    if instructions.work_items.is_empty() {
        return format!("{title} - {}\nNo work items.", instructions.project_name);
    }

    let stats = quick_stats(instructions);
    let structure_note = if stats.proper_chain {
        "proper dependency chain"
    } else if stats.epics > 1 {
        "multiple epics"
    } else {
        "standard structure"
    };

    let mut out = format!(
        "=== {title} - {} ===\n\
         structure: {} Epic -> {} Tasks ({structure_note})\n\n",
        instructions.project_name, stats.epics, stats.tasks,
    );

    for (index, epic) in instructions.epics().enumerate() {
        out.push_str(&format!(
            "Epic {}: \"{}\"\n  priority: {} | tags: {}\n",
            index + 1,
            epic.title,
            epic.priority.label(),
            epic.tags.join(", "),
        ));
        out.push_str(&format!("  description: {}\n", truncate(&epic.description, 100)));

        let owned: Vec<&WorkItem> = instructions.tasks_of(&epic.id).collect();
        if !owned.is_empty() {
            out.push_str(&format!("  tasks ({}):\n", owned.len()));
            for (task_index, task) in owned.iter().enumerate() {
                let connector = if task_index + 1 == owned.len() {
                    "└──"
                } else {
                    "├──"
                };
                out.push_str(&format!(
                    "  {connector} {}. {} [{} priority]\n",
                    task_index + 1,
                    task.title,
                    task.priority.label(),
                ));
            }
        }
        out.push('\n');
    }

    let sequence: Vec<&str> = instructions.tasks().map(|t| t.title.as_str()).collect();
    if !sequence.is_empty() {
        out.push_str(&format!("workflow sequence: {}\n", sequence.join(" -> ")));
    }

    out
}

/// Truncate a description to `max` characters for one-line display.
fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ado_core::config::AdoConfig;
    use ado_synth::engine::{SynthesisRequest, synthesize};

    fn sample() -> AdoInstructions {
        synthesize(
            &SynthesisRequest {
                text: "Build a database. Then build a website. Then build a frontend.",
                project_name: Some("Demo"),
                ..Default::default()
            },
            &AdoConfig::default(),
        )
    }

    #[test]
    fn test_quick_stats_detects_proper_chain() {
        let stats = quick_stats(&sample());
        assert_eq!(stats.epics, 1);
        assert_eq!(stats.tasks, 3);
        assert_eq!(stats.total, 4);
        assert!(stats.proper_chain);
    }

    #[test]
    fn test_summary_lists_epic_and_tasks() {
        let summary = format_summary(&sample(), "Review");
        assert!(summary.contains("=== Review - Demo ==="));
        assert!(summary.contains("structure: 1 Epic -> 3 Tasks (proper dependency chain)"));
        assert!(summary.contains("Epic 1: \"Epic: Database to Frontend Workflow\""));
        assert!(summary.contains("1. Implement Database Component"));
        assert!(summary.contains("└── 3. Implement Frontend Component"));
        assert!(summary.contains(
            "workflow sequence: Implement Database Component -> Implement Website Component -> Implement Frontend Component"
        ));
    }

    #[test]
    fn test_summary_for_empty_instructions() {
        let empty = synthesize(
            &SynthesisRequest {
                text: "",
                ..Default::default()
            },
            &AdoConfig::default(),
        );
        let summary = format_summary(&empty, "Review");
        assert!(summary.contains("No work items."));
    }

    #[test]
    fn test_description_truncation() {
        assert_eq!(truncate("short", 10), "short");
        let long = "x".repeat(150);
        let cut = truncate(&long, 100);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 103);
    }
}
