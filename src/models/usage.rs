//! Per-session context usage estimate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::constants::TRACKED_TOOL_NAME;

/// Persisted usage counter for one host session.
///
/// Stored as `conductor/.context_usage`. A record belongs to exactly one
/// session; a different session id starts a fresh count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub task_completions: u32,
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub estimated_percent: u8,
}

/// Kind of event delivered to the usage tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageEvent {
    /// A delegated sub-task finished
    TaskCompleted,
    /// Any other tool use; never counted
    Other,
}

impl UsageEvent {
    pub fn from_tool_name(tool_name: &str) -> Self {
        if tool_name == TRACKED_TOOL_NAME {
            UsageEvent::TaskCompleted
        } else {
            UsageEvent::Other
        }
    }

    pub fn is_tracked(self) -> bool {
        matches!(self, UsageEvent::TaskCompleted)
    }
}

impl UsageRecord {
    /// Start an empty record for `session_id`.
    pub fn new(session_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            task_completions: 0,
            session_id: session_id.into(),
            started_at: now,
            updated_at: now,
            estimated_percent: 0,
        }
    }

    /// Apply one event to the prior record and return the successor.
    ///
    /// Returns `None` for untracked events so the caller leaves persisted
    /// state alone. A prior record from another session is discarded, never
    /// merged.
    pub fn advance(
        prior: Option<UsageRecord>,
        session_id: &str,
        event: UsageEvent,
        max_tasks: u32,
        now: DateTime<Utc>,
    ) -> Option<UsageRecord> {
        if !event.is_tracked() {
            return None;
        }

        let mut record = match prior {
            Some(record) if record.session_id == session_id => record,
            _ => UsageRecord::new(session_id, now),
        };

        record.task_completions = record.task_completions.saturating_add(1);
        record.updated_at = now;
        record.estimated_percent = estimate_percent(record.task_completions, max_tasks);

        Some(record)
    }
}

/// `min(100, round(completions / max_tasks * 100))`, rounding half up.
pub fn estimate_percent(completions: u32, max_tasks: u32) -> u8 {
    let max_tasks = u64::from(max_tasks.max(1));
    let scaled = (u64::from(completions) * 100 + max_tasks / 2) / max_tasks;
    scaled.min(100) as u8
}
