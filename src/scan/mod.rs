//! Plan scanning and task extraction.
//!
//! This module contains the single-pass scanner that reads a plan document
//! line-by-line and extracts checklist entries from it.

mod plan;

pub use plan::{scan_plan, ScanContext, COMMAND_KEYWORDS, DEFAULT_PHASE, DEFAULT_TIMELINE};
