//! Hooks command implementation
//!
//! `conductor hook <kind>` is what Claude Code runs for each registered hook;
//! `conductor hooks config|list` help wire those into project settings.

use anyhow::{Context, Result};
use std::io::{Read, Write};

use crate::hooks::settings::{conductor_hooks_config, hook_rows};
use crate::hooks::{
    context_threshold, session_end, session_start, track_changes, HookInput, HookResult,
};

/// Which hook handler to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    SessionStart,
    ContextThreshold,
    TrackChanges,
    SessionEnd,
}

/// Run one hook against a raw payload
pub fn dispatch(kind: HookKind, raw_input: &str) -> Result<HookResult> {
    let input = HookInput::parse(raw_input)?;

    tracing::debug!(
        ?kind,
        session_id = input.session_id(),
        tool_name = input.tool_name(),
        "dispatching hook"
    );

    match kind {
        HookKind::SessionStart => session_start::run(&input),
        HookKind::ContextThreshold => context_threshold::run(&input),
        HookKind::TrackChanges => track_changes::run(&input),
        HookKind::SessionEnd => session_end::run(&input),
    }
}

/// Read the payload fully from `stdin`, run the hook, write its output.
///
/// Nothing is written to `stdout` when the hook has nothing to inject.
pub fn run<R: Read, W: Write, E: Write>(
    kind: HookKind,
    mut stdin: R,
    mut stdout: W,
    mut stderr: E,
) -> Result<()> {
    let mut raw_input = String::new();
    stdin
        .read_to_string(&mut raw_input)
        .context("Failed to read hook input from stdin")?;

    let result = dispatch(kind, &raw_input)?;

    if let Some(out) = result.stdout {
        writeln!(stdout, "{out}").context("Failed to write hook output")?;
        stdout.flush().context("Failed to flush hook output")?;
    }
    if let Some(note) = result.stderr {
        writeln!(stderr, "{note}").context("Failed to write hook note")?;
    }

    Ok(())
}

/// Print the `hooks` settings block as JSON
pub fn config() -> Result<()> {
    let hooks = serde_json::json!({ "hooks": conductor_hooks_config() });
    let rendered =
        serde_json::to_string_pretty(&hooks).context("Failed to serialize hooks config")?;
    println!("{rendered}");
    Ok(())
}

/// List conductor hooks and their matchers
pub fn list() -> Result<()> {
    let config = conductor_hooks_config();

    println!("Conductor hooks configuration:\n");

    let mut current_event: Option<String> = None;
    for (event, matcher, command) in hook_rows(&config) {
        if current_event.as_deref() != Some(event.as_str()) {
            if current_event.is_some() {
                println!();
            }
            println!("{event}:");
            current_event = Some(event);
        }
        println!("  [{matcher}] -> {command}");
    }

    println!();
    println!("Add these to .claude/settings.json with: conductor hooks config");

    Ok(())
}
