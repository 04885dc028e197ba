//! Checklist rendering.
//!
//! Serializes an ordered list of tasks into the checklist document and
//! computes the per-kind summary counts.

use chrono::{DateTime, Local};

use crate::core::{Task, TaskKind};

/// Per-kind record counts for a generated checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Total number of records
    pub total: usize,

    /// Number of milestone records
    pub milestones: usize,

    /// Number of command records
    pub commands: usize,

    /// Number of implementation-task records
    pub tasks: usize,
}

impl Summary {
    /// Count records per kind.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            milestones: tasks.iter().filter(|t| t.kind == TaskKind::Milestone).count(),
            commands: tasks.iter().filter(|t| t.kind == TaskKind::Command).count(),
            tasks: tasks.iter().filter(|t| t.kind == TaskKind::Task).count(),
        }
    }
}

/// Render the checklist document.
///
/// Records are written in extraction order. A phase heading is emitted
/// every time the phase changes from the previous record, so a phase label
/// that recurs non-contiguously is re-headed each time it reappears.
pub fn render_checklist(
    tasks: &[Task],
    title: &str,
    source_name: &str,
    generated_at: DateTime<Local>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {title}\n\n"));
    out.push_str(&format!(
        "Generated from {source_name} - {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str("## Deploy Early, Deploy Often Strategy\n\n");
    out.push_str("Every phase includes deployment milestones.\n\n");

    let mut current_phase = "";
    for task in tasks {
        if task.phase != current_phase {
            current_phase = &task.phase;
            out.push_str(&format!("\n## {current_phase}\n\n"));
        }

        out.push_str(&format!(
            "{} **Task {:03}** {} [{}]\n",
            task.status.glyph(),
            task.id,
            task.kind.icon(),
            task.timeline
        ));
        out.push_str(&format!("   - {}\n\n", task.description));
    }

    let summary = Summary::from_tasks(tasks);
    out.push_str(&format!("\n---\n\nTotal Tasks: {}\n", summary.total));
    out.push_str(&format!("Milestones: {}\n", summary.milestones));
    out.push_str(&format!("Commands: {}\n", summary.commands));
    out.push_str(&format!("Implementation Tasks: {}\n", summary.tasks));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TaskKind;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(1, TaskKind::Command, "Execute: git init", "Phase 1: Setup", "Day 1"),
            Task::new(2, TaskKind::Milestone, "Repo scaffolded", "Phase 1: Setup", "Day 1"),
            Task::new(3, TaskKind::Task, "Build the settings page", "Phase 2: Features", "Day 2"),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::from_tasks(&sample_tasks());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.commands, 1);
        assert_eq!(summary.milestones, 1);
        assert_eq!(summary.tasks, 1);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = Summary::from_tasks(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.commands, 0);
        assert_eq!(summary.milestones, 0);
        assert_eq!(summary.tasks, 0);
    }

    #[test]
    fn test_render_header_and_footer() {
        let doc = render_checklist(&sample_tasks(), "Implementation Tasks", "PLAN.md", Local::now());

        assert!(doc.starts_with("# Implementation Tasks\n\n"));
        assert!(doc.contains("Generated from PLAN.md - "));
        assert!(doc.contains("## Deploy Early, Deploy Often Strategy"));
        assert!(doc.ends_with("Total Tasks: 3\nMilestones: 1\nCommands: 1\nImplementation Tasks: 1\n"));
    }

    #[test]
    fn test_render_record_blocks() {
        let doc = render_checklist(&sample_tasks(), "Tasks", "PLAN.md", Local::now());

        assert!(doc.contains("⬜ **Task 001** 🔧 [Day 1]\n   - Execute: git init\n"));
        assert!(doc.contains("⬜ **Task 002** 🎯 [Day 1]\n   - Repo scaffolded\n"));
        assert!(doc.contains("⬜ **Task 003** 📋 [Day 2]\n   - Build the settings page\n"));
    }

    #[test]
    fn test_phase_heading_emitted_on_change() {
        let doc = render_checklist(&sample_tasks(), "Tasks", "PLAN.md", Local::now());

        assert_eq!(doc.matches("\n## Phase 1: Setup\n").count(), 1);
        assert_eq!(doc.matches("\n## Phase 2: Features\n").count(), 1);
    }

    #[test]
    fn test_recurring_phase_is_reheaded() {
        // A phase label that reappears non-contiguously gets a fresh heading.
        let tasks = vec![
            Task::new(1, TaskKind::Task, "First block of work", "Phase 1: Setup", "Day 1"),
            Task::new(2, TaskKind::Task, "Interlude elsewhere", "Phase 2: Features", "Day 1"),
            Task::new(3, TaskKind::Task, "Back to the start", "Phase 1: Setup", "Day 1"),
        ];
        let doc = render_checklist(&tasks, "Tasks", "PLAN.md", Local::now());

        assert_eq!(doc.matches("\n## Phase 1: Setup\n").count(), 2);
    }

    #[test]
    fn test_ids_zero_padded_to_three_digits() {
        let tasks =
            vec![Task::new(42, TaskKind::Task, "A task somewhere far in", "Phase 9", "Day 9")];
        let doc = render_checklist(&tasks, "Tasks", "PLAN.md", Local::now());

        assert!(doc.contains("**Task 042**"));
    }

    #[test]
    fn test_render_is_stable_apart_from_timestamp() {
        let at = Local::now();
        let first = render_checklist(&sample_tasks(), "Tasks", "PLAN.md", at);
        let second = render_checklist(&sample_tasks(), "Tasks", "PLAN.md", at);
        assert_eq!(first, second);
    }
}
