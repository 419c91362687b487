//! PostToolUse hook: log edits to track plans.

use anyhow::Result;
use chrono::{DateTime, Utc};

use super::{HookInput, HookResult};
use crate::fs::session_log::{append_line, format_modification};
use crate::fs::ConductorDir;

/// Whether an edited path is a Conductor plan document.
pub fn is_plan_path(file_path: &str) -> bool {
    file_path.contains("conductor") && file_path.contains("plan.md")
}

/// Append a log line for `file_path` if it is a plan. Returns whether a line
/// was written.
pub fn record_modification(
    dir: &ConductorDir,
    file_path: &str,
    now: DateTime<Utc>,
) -> Result<bool> {
    if !is_plan_path(file_path) {
        return Ok(false);
    }

    append_line(&dir.session_log(), &format_modification(now, file_path))?;
    Ok(true)
}

/// Hook entry point. Never produces output.
pub fn run(input: &HookInput) -> Result<HookResult> {
    if let Some(file_path) = input.file_path() {
        let dir = ConductorDir::new(input.project_root());
        if record_modification(&dir, file_path, Utc::now())? {
            tracing::debug!(file_path, "plan modification logged");
        }
    }
    Ok(HookResult::empty())
}
