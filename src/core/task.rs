//! Task data structures.
//!
//! Defines the `Task` struct that represents a single checklist entry
//! extracted from a plan document.

use serde::{Deserialize, Serialize};

/// A checklist entry extracted from a plan document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential identifier, assigned in encounter order starting at 1
    pub id: u32,

    /// Label of the most recent phase header seen before this entry
    pub phase: String,

    /// Label of the most recent timeline header seen before this entry
    pub timeline: String,

    /// Human-readable description of the work item
    pub description: String,

    /// What kind of entry this is
    pub kind: TaskKind,

    /// Completion state (always pending at extraction time)
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task.
    pub fn new(
        id: u32,
        kind: TaskKind,
        description: impl Into<String>,
        phase: impl Into<String>,
        timeline: impl Into<String>,
    ) -> Self {
        Self {
            id,
            phase: phase.into(),
            timeline: timeline.into(),
            description: description.into(),
            kind,
            status: TaskStatus::Pending,
        }
    }
}

/// Kind of checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// A shell command lifted from a fenced code block
    Command,

    /// A goal marker
    Milestone,

    /// A generic implementation task from a bullet point
    Task,
}

impl TaskKind {
    /// Get the icon/emoji for this kind.
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Command => "🔧",
            Self::Milestone => "🎯",
            Self::Task => "📋",
        }
    }

    /// Get the label used in summary output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Command => "Commands",
            Self::Milestone => "Milestones",
            Self::Task => "Implementation Tasks",
        }
    }
}

/// Completion state of a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet done
    Pending,

    /// Completed
    Done,
}

impl TaskStatus {
    /// Get the checkbox glyph for this status.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Pending => "⬜",
            Self::Done => "✅",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}
