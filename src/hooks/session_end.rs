//! Stop hook: remind about tracks left in progress.

use anyhow::Result;
use colored::Colorize;

use super::{HookInput, HookResult};
use crate::fs::state::load_text;
use crate::fs::ConductorDir;
use crate::parser::count_in_progress;

/// Reminder for `in_progress` open tracks, or `None` when there are none.
pub fn format_reminder(in_progress: usize) -> Option<String> {
    if in_progress == 0 {
        return None;
    }
    Some(format!(
        "\n{} {in_progress} track(s) still in progress.\n{}",
        "Conductor:".yellow().bold(),
        "Run /conductor:status to see details.".dimmed()
    ))
}

/// Hook entry point. Writes only to stderr.
pub fn run(input: &HookInput) -> Result<HookResult> {
    let dir = ConductorDir::new(input.project_root());

    let reminder = load_text(&dir.tracks_file())
        .map(|ledger| count_in_progress(&ledger))
        .and_then(format_reminder);

    Ok(reminder.map(HookResult::note).unwrap_or_default())
}
