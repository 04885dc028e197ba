//! End-to-end plan-to-checklist transform.
//!
//! Ties the pipeline together: read the plan, extract tasks, render the
//! checklist, write it out. The whole run is a single-shot batch transform
//! with no partial-output guarantees.

use std::io;
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

use crate::core::{Config, Task};
use crate::render::{render_checklist, Summary};
use crate::scan::scan_plan;

/// Errors that abort a transform run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Plan file missing or unreadable.
    #[error("Cannot read plan file {}: {}", .path.display(), .source)]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Checklist destination not writable.
    #[error("Cannot write checklist {}: {}", .path.display(), .source)]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs the read, scan, render, write pipeline.
pub struct Transformer {
    config: Config,
}

impl Transformer {
    /// Create a transformer for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Extract tasks and render the checklist without writing it.
    pub fn preview(&self) -> Result<(String, Vec<Task>), TransformError> {
        let content = std::fs::read_to_string(&self.config.input).map_err(|source| {
            TransformError::InputUnavailable { path: self.config.input.clone(), source }
        })?;

        let tasks = scan_plan(&content);
        tracing::debug!(count = tasks.len(), "Extracted tasks");

        let document =
            render_checklist(&tasks, &self.config.title, &self.input_name(), Local::now());

        Ok((document, tasks))
    }

    /// Run the transform and write the checklist file.
    pub fn run(&self) -> Result<Summary, TransformError> {
        let (document, tasks) = self.preview()?;

        std::fs::write(&self.config.output, document).map_err(|source| {
            TransformError::OutputUnwritable { path: self.config.output.clone(), source }
        })?;

        tracing::debug!(path = %self.config.output.display(), "Wrote checklist");
        Ok(Summary::from_tasks(&tasks))
    }

    /// File name of the plan, as shown in the generated header.
    fn input_name(&self) -> String {
        self.config
            .input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("PLAN.md")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "
## Phase 1: Setup

```bash
git init myrepo
```

- Establish the directory conventions
🎯 **Goal**: Repo scaffolded
";

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            input: dir.join("PLAN.md"),
            output: dir.join("TASKS.md"),
            title: "Implementation Tasks".to_string(),
        }
    }

    #[test]
    fn test_run_writes_checklist() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("PLAN.md"), PLAN).unwrap();

        let summary = Transformer::new(config_in(dir.path())).run().unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.commands, 1);
        assert_eq!(summary.tasks, 1);
        assert_eq!(summary.milestones, 1);

        let written = std::fs::read_to_string(dir.path().join("TASKS.md")).unwrap();
        assert!(written.starts_with("# Implementation Tasks\n"));
        assert!(written.contains("Generated from PLAN.md - "));
        assert!(written.contains("Execute: git init myrepo"));
        assert!(written.contains("Repo scaffolded"));
    }

    #[test]
    fn test_run_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("PLAN.md"), PLAN).unwrap();
        std::fs::write(dir.path().join("TASKS.md"), "stale content\n").unwrap();

        Transformer::new(config_in(dir.path())).run().unwrap();

        let written = std::fs::read_to_string(dir.path().join("TASKS.md")).unwrap();
        assert!(!written.contains("stale content"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let err = Transformer::new(config_in(dir.path())).run().unwrap_err();
        assert!(matches!(err, TransformError::InputUnavailable { .. }));
        assert!(err.to_string().contains("Cannot read plan file"));
    }

    #[test]
    fn test_unwritable_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("PLAN.md"), PLAN).unwrap();

        // Writing to a path that is a directory fails
        let mut config = config_in(dir.path());
        config.output = dir.path().to_path_buf();

        let err = Transformer::new(config).run().unwrap_err();
        assert!(matches!(err, TransformError::OutputUnwritable { .. }));
    }

    #[test]
    fn test_preview_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("PLAN.md"), PLAN).unwrap();

        let (document, tasks) = Transformer::new(config_in(dir.path())).preview().unwrap();

        assert_eq!(tasks.len(), 3);
        assert!(document.contains("Execute: git init myrepo"));
        assert!(!dir.path().join("TASKS.md").exists());
    }

    #[test]
    fn test_idempotent_apart_from_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("PLAN.md"), PLAN).unwrap();
        let transformer = Transformer::new(config_in(dir.path()));

        transformer.run().unwrap();
        let first = std::fs::read_to_string(dir.path().join("TASKS.md")).unwrap();
        transformer.run().unwrap();
        let second = std::fs::read_to_string(dir.path().join("TASKS.md")).unwrap();

        let strip_timestamp = |doc: &str| {
            doc.lines()
                .filter(|l| !l.starts_with("Generated from "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip_timestamp(&first), strip_timestamp(&second));
    }
}
