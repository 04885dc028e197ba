//! # Tasklift
//!
//! Turn narrative implementation plans into trackable task checklists.
//!
//! Tasklift reads a `PLAN.md`-style markdown document, extracts shell
//! commands, milestones, and bullet tasks in a single line-by-line pass,
//! and regenerates a `TASKS.md` checklist with sequential task ids and
//! per-kind summary counts.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install tasklift
//!
//! # Generate TASKS.md from PLAN.md in the current directory
//! tasklift
//!
//! # Inspect what would be extracted, without writing anything
//! tasklift scan --format json
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

pub mod core;
pub mod render;
pub mod scan;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{Config, Task, TaskKind, TaskStatus};
pub use crate::render::{render_checklist, Summary};
pub use crate::scan::scan_plan;
pub use crate::transform::{TransformError, Transformer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "tasklift";
