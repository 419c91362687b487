use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::constants::{DEFAULT_THRESHOLD_PERCENT, UNKNOWN_NEXT_TASK};

/// Pause marker written when a session stops at the context threshold.
///
/// The agent writes this file; fields it adds beyond the two we read are
/// preserved in `extra` so a rewrite does not drop them. A known field of
/// the wrong type reads as absent rather than rejecting the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandoffState {
    #[serde(
        default,
        deserialize_with = "lenient_percent",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold_percent: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_task: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HandoffState {
    pub fn new(threshold_percent: u32, next_task: impl Into<String>) -> Self {
        Self {
            threshold_percent: Some(threshold_percent),
            next_task: Some(next_task.into()),
            extra: serde_json::Map::new(),
        }
    }

    /// Threshold the session paused at; zero or absent reads as the default.
    pub fn threshold_percent(&self) -> u32 {
        self.threshold_percent
            .filter(|p| *p > 0)
            .unwrap_or(u32::from(DEFAULT_THRESHOLD_PERCENT))
    }

    pub fn next_task(&self) -> &str {
        self.next_task
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNKNOWN_NEXT_TASK)
    }
}

/// Integer percentages in `1..=100`; anything else is absent.
fn lenient_percent<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|p| u32::try_from(p).ok())
        .filter(|p| (1..=100).contains(p)))
}

/// Non-blank strings; anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .map(String::from))
}

/// A handoff record together with the track it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingHandoff {
    pub track_id: String,
    pub state: HandoffState,
}
