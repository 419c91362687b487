//! Context threshold resolution from `conductor/workflow.md`.
//!
//! The workflow document carries a settings table with a row such as
//!
//! ```text
//! | Context Threshold | Handoff trigger | `70%` |
//! ```

use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use crate::models::constants::DEFAULT_THRESHOLD_PERCENT;

static THRESHOLD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Context Threshold[^|]*\|[^|]*\|[^`]*`(\d+)%`").expect("Invalid regex")
});

/// Extract the threshold percentage, if the document configures a valid one.
pub fn parse_threshold(content: &str) -> Option<u8> {
    let digits = THRESHOLD_PATTERN.captures(content)?.get(1)?.as_str();
    digits.parse::<u8>().ok().filter(|p| *p <= 100)
}

/// Threshold from the document, falling back to the default.
pub fn resolve_threshold(content: &str) -> u8 {
    parse_threshold(content).unwrap_or_else(|| {
        tracing::debug!("no context threshold in workflow; using default");
        DEFAULT_THRESHOLD_PERCENT
    })
}

/// Memoized threshold with explicit expiry.
///
/// Only worth keeping across calls inside one long-lived process; each hook
/// invocation starts with an empty cache.
#[derive(Debug, Clone)]
pub struct ThresholdCache {
    ttl: Duration,
    entry: Option<(u8, Instant)>,
}

impl ThresholdCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// Cached value if still fresh at `now`.
    pub fn get(&self, now: Instant) -> Option<u8> {
        let (value, computed_at) = self.entry?;
        (now.saturating_duration_since(computed_at) < self.ttl).then_some(value)
    }

    /// Return the cached threshold or re-resolve it from `content`.
    pub fn resolve(&mut self, now: Instant, content: &str) -> u8 {
        if let Some(value) = self.get(now) {
            return value;
        }
        let value = resolve_threshold(content);
        self.entry = Some((value, now));
        value
    }
}
