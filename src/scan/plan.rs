//! Plan document scanner.
//!
//! Walks a plan document line-by-line, tracking the current phase and
//! timeline headers, and extracts three kinds of checklist entries:
//! shell commands from ```bash blocks, goal milestones, and bullet tasks.
//!
//! The matching here is deliberately literal substring heuristics, not a
//! markdown parser. Lines inside a command block are still visited by the
//! outer pass, so a bullet line in a block can be extracted twice: once as
//! a command and once as a task.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Task, TaskKind};

/// Command-name substrings recognized inside ```bash blocks.
pub const COMMAND_KEYWORDS: &[&str] =
    &["npx", "pnpm", "git", "npm", "gh", "mkdir", "cat", "curl", "docker"];

/// Phase label used before any phase header has been seen.
pub const DEFAULT_PHASE: &str = "Setup";

/// Timeline label used before any timeline header has been seen.
pub const DEFAULT_TIMELINE: &str = "Day 1";

/// Command descriptions longer than this are truncated with an ellipsis.
const MAX_COMMAND_CHARS: usize = 100;

/// Bullet text this short is treated as noise and skipped.
const MIN_BULLET_CHARS: usize = 10;

static MILESTONE_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*|🎯").unwrap());

/// Running context for a single extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    /// Most recently seen phase header label
    pub phase: String,

    /// Most recently seen timeline header label
    pub timeline: String,
}

impl Default for ScanContext {
    fn default() -> Self {
        Self { phase: DEFAULT_PHASE.to_string(), timeline: DEFAULT_TIMELINE.to_string() }
    }
}

/// Extract checklist entries from plan content in a single forward pass.
///
/// Ids are assigned sequentially in encounter order starting at 1. The
/// phase and timeline on each entry reflect the most recent header seen
/// strictly before the entry's source line.
pub fn scan_plan(content: &str) -> Vec<Task> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut tasks: Vec<Task> = Vec::new();
    let mut ctx = ScanContext::default();

    for (i, line) in lines.iter().enumerate() {
        if line.contains("## Phase") {
            // Phase header
            ctx.phase = line.replace("##", "").trim().to_string();
        } else if is_timeline_header(line) {
            // Day/time header
            ctx.timeline = line.replace("###", "").trim().to_string();
        } else if i > 0 && lines[i - 1].contains("```bash") {
            // First line inside a ```bash fence: bounded lookahead to the
            // closing fence (exclusive). The outer pass does not skip ahead.
            for cmd_line in block_command_lines(&lines[i..]) {
                let id = next_id(&tasks);
                tasks.push(Task::new(
                    id,
                    TaskKind::Command,
                    command_description(cmd_line),
                    &ctx.phase,
                    &ctx.timeline,
                ));
            }
        } else if line.contains('🎯') {
            // Milestone marker
            if let Some(text) = milestone_text(line) {
                let id = next_id(&tasks);
                tasks.push(Task::new(id, TaskKind::Milestone, text, &ctx.phase, &ctx.timeline));
            }
        } else if line.trim().starts_with("- ") && ctx.phase.contains("Phase") {
            // Implementation task from a bullet point
            if let Some(text) = bullet_text(line) {
                let id = next_id(&tasks);
                tasks.push(Task::new(id, TaskKind::Task, text, &ctx.phase, &ctx.timeline));
            }
        }
    }

    tasks
}

/// Next sequential id for the accumulating list.
fn next_id(tasks: &[Task]) -> u32 {
    tasks.len() as u32 + 1
}

/// Check if a line is a timeline (day/time-of-day) header.
fn is_timeline_header(line: &str) -> bool {
    line.contains("### Day")
        || line.contains("### Morning")
        || line.contains("### Afternoon")
        || line.contains("### Evening")
}

/// Collect keyword-matching command lines from the start of a fenced block.
///
/// `rest` begins at the first line inside the block; the scan stops at the
/// first line containing a closing fence (exclusive). Empty lines and shell
/// comments are skipped, as are lines without a recognized command name.
fn block_command_lines<'a>(rest: &[&'a str]) -> Vec<&'a str> {
    let mut found = Vec::new();

    for raw in rest {
        if raw.contains("```") {
            break;
        }

        let cmd_line = raw.trim();
        if cmd_line.is_empty() || cmd_line.starts_with('#') {
            continue;
        }

        if COMMAND_KEYWORDS.iter().any(|kw| cmd_line.contains(kw)) {
            found.push(cmd_line);
        }
    }

    found
}

/// Build a command description, truncating overlong lines.
fn command_description(cmd_line: &str) -> String {
    if cmd_line.chars().count() > MAX_COMMAND_CHARS {
        let head: String = cmd_line.chars().take(MAX_COMMAND_CHARS).collect();
        format!("Execute: {head}...")
    } else {
        format!("Execute: {cmd_line}")
    }
}

/// Strip bold markers and the goal emoji, then return the text after the
/// first colon. Lines without a colon carry no extractable goal.
fn milestone_text(line: &str) -> Option<String> {
    let stripped = MILESTONE_MARKUP.replace_all(line, "");
    let stripped = stripped.trim();

    if stripped.is_empty() || !stripped.contains(':') {
        return None;
    }

    stripped.split_once(':').map(|(_, rest)| rest.trim().to_string())
}

/// Return the text after a bullet marker, filtering out checklist
/// placeholders and noise lines.
///
/// The caller guarantees the trimmed line starts with `- `.
fn bullet_text(line: &str) -> Option<String> {
    let text = &line.trim()[2..];

    if text.starts_with('[') || text.chars().count() <= MIN_BULLET_CHARS {
        return None;
    }

    Some(text.to_string())
}
