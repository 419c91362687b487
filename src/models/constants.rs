//! Shared constants for session tracking and handoff composition.

use std::time::Duration;

/// Delegated sub-tasks assumed to fill a session's useful context.
///
/// This is a calibration heuristic, not a measured limit. Override it per
/// project with `max_tasks_per_session` in `conductor/config.toml`.
pub const MAX_TASKS_PER_SESSION: u32 = 10;

/// Threshold used when the workflow document does not configure one.
pub const DEFAULT_THRESHOLD_PERCENT: u8 = 70;

/// How long a resolved threshold stays fresh.
pub const THRESHOLD_CACHE_TTL: Duration = Duration::from_secs(60);

/// Upper bound on simultaneous file reads within one invocation.
pub const MAX_CONCURRENT_READS: usize = 5;

/// Session id used when the host omits one.
pub const UNKNOWN_SESSION_ID: &str = "unknown";

/// Next-task placeholder for handoff records that omit it.
pub const UNKNOWN_NEXT_TASK: &str = "Unknown";

/// Tool whose completion counts as a context-consuming event.
pub const TRACKED_TOOL_NAME: &str = "Task";
