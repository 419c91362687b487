//! Locating the next task in a track's `plan.md`.
//!
//! The scan is a two-state machine (before any phase heading, inside a
//! phase) driven line by line. Task markers:
//!
//! - `- [~] ...` in progress
//! - `- [ ] ...` pending
//! - `- [x] ...` done (skipped)

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{NextTask, PlanTaskStatus};

static PHASE_HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*#*\s*Phase\s+\d+\s*:\s*(.*?)\s*(?:\[\s*checkpoint[^\]]*\]\s*)?$")
        .expect("Invalid regex")
});
static IN_PROGRESS_TASK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[~\]\s+(.+?)\s*$").expect("Invalid regex"));
static PENDING_TASK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+\[ \]\s+(.+?)\s*$").expect("Invalid regex"));

#[derive(Debug)]
enum ScanState<'a> {
    NoPhase,
    InPhase(&'a str),
}

impl<'a> ScanState<'a> {
    fn phase(&self) -> Option<String> {
        match self {
            ScanState::NoPhase => None,
            ScanState::InPhase(title) => Some((*title).to_string()),
        }
    }
}

/// Find the task a resuming session should execute.
///
/// An in-progress task anywhere in the plan wins over pending ones, since an
/// interrupted task must be finished first. Otherwise the first pending task
/// is returned. `None` means the plan is finished or has no task markers.
pub fn find_next_task(content: &str) -> Option<NextTask> {
    let mut state = ScanState::NoPhase;
    let mut first_pending: Option<NextTask> = None;

    for line in content.lines() {
        if let Some(title) = phase_title(line) {
            state = match title {
                "" => ScanState::NoPhase,
                title => ScanState::InPhase(title),
            };
            continue;
        }

        if let Some(task) = task_text(&IN_PROGRESS_TASK_PATTERN, line) {
            return Some(NextTask {
                task,
                phase: state.phase(),
                status: PlanTaskStatus::InProgress,
            });
        }

        if first_pending.is_none() {
            if let Some(task) = task_text(&PENDING_TASK_PATTERN, line) {
                first_pending = Some(NextTask {
                    task,
                    phase: state.phase(),
                    status: PlanTaskStatus::Pending,
                });
            }
        }
    }

    first_pending
}

fn phase_title(line: &str) -> Option<&str> {
    PHASE_HEADING_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn task_text(pattern: &Regex, line: &str) -> Option<String> {
    let text = pattern.captures(line)?.get(1)?.as_str();
    let text = text.strip_prefix("Task:").unwrap_or(text).trim();
    (!text.is_empty()).then(|| text.to_string())
}
