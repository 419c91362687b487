//! Claude Code hook handlers for Conductor projects.
//!
//! Each handler takes the parsed hook payload and returns a [`HookResult`];
//! the command layer owns stdin/stdout. Handlers never fail on missing or
//! malformed project files, only on I/O errors while writing state.
//!
//! | Handler | Host event | Purpose |
//! |---------|-----------|---------|
//! | [`session_start`] | `SessionStart` | Inject the resumption brief |
//! | [`context_threshold`] | `PostToolUse` (Task) | Estimate context use, signal handoff |
//! | [`track_changes`] | `PostToolUse` (Edit/Write) | Log plan.md edits |
//! | [`session_end`] | `Stop` | Remind about in-progress tracks |

pub mod context_threshold;
pub mod input;
pub mod session_end;
pub mod session_start;
pub mod settings;
pub mod track_changes;

pub use input::HookInput;

use serde::Serialize;

/// Host event a handler reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    SessionStart,
    PostToolUse,
}

impl HookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::SessionStart => "SessionStart",
            HookEvent::PostToolUse => "PostToolUse",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HookOutput<'a> {
    hook_specific_output: HookSpecificOutput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HookSpecificOutput<'a> {
    hook_event_name: &'a str,
    additional_context: &'a str,
}

/// Serialize the `hookSpecificOutput` envelope.
pub fn render_envelope(event: HookEvent, additional_context: &str) -> String {
    let output = HookOutput {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: event.as_str(),
            additional_context,
        },
    };
    // Two string fields cannot fail to serialize
    serde_json::to_string(&output).unwrap_or_default()
}

/// What a handler wants written back to the host.
///
/// - `stdout`: JSON envelope consumed by Claude Code
/// - `stderr`: note shown to the user
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HookResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl HookResult {
    /// Inject `additional_context` into the session.
    pub fn context(event: HookEvent, additional_context: &str) -> Self {
        Self {
            stdout: Some(render_envelope(event, additional_context)),
            stderr: None,
        }
    }

    /// Print a note on stderr only.
    pub fn note(message: String) -> Self {
        Self {
            stdout: None,
            stderr: Some(message),
        }
    }

    /// Nothing to report.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_none() && self.stderr.is_none()
    }
}
