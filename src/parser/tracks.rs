//! Parsing of the track ledger (`conductor/tracks.md`).
//!
//! Each track occupies one line carrying a bracketed status tag, e.g.
//!
//! ```text
//! - [in-progress] **Track: Add user auth** [auth_20250101]
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ActiveTrack, TrackRegistry, TrackStatus};

static BRACKET_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\[]+)\]").expect("Invalid regex"));
static TRAILING_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Za-z0-9][A-Za-z0-9_.\-]*)\][\s*_]*$").expect("Invalid regex")
});
static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Track:\s*([^\[\]]+)").expect("Invalid regex"));

/// Parse the ledger into status counts and the active track.
///
/// A line's status is its first recognised bracket tag; later tags on the
/// same line are part of the description. Lines without a recognised tag are
/// ignored. When several lines are in-progress the earliest is active and the
/// rest are only counted.
pub fn parse_track_registry(content: &str) -> TrackRegistry {
    let mut registry = TrackRegistry::default();

    for line in content.lines() {
        let Some(status) = line_status(line) else {
            continue;
        };
        registry.counts.record(status);

        if registry.active.is_none() && status == TrackStatus::InProgress {
            registry.active = Some(parse_active_line(line));
        }
    }

    if registry.counts.in_progress > 1 {
        tracing::warn!(
            in_progress = registry.counts.in_progress,
            "multiple in-progress tracks in ledger; using the first"
        );
    }

    registry
}

/// Number of in-progress lines, counted the same way as
/// [`parse_track_registry`].
pub fn count_in_progress(content: &str) -> usize {
    content
        .lines()
        .filter_map(line_status)
        .filter(|status| *status == TrackStatus::InProgress)
        .count()
}

fn line_status(line: &str) -> Option<TrackStatus> {
    BRACKET_TAG_PATTERN
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .find_map(|m| TrackStatus::from_tag(m.as_str().trim()))
}

fn parse_active_line(line: &str) -> ActiveTrack {
    let id = TRAILING_ID_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|tag| TrackStatus::from_tag(tag).is_none())
        .map(String::from);

    let description = DESCRIPTION_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().trim_matches(['*', '_']).trim().to_string())
        .filter(|d| !d.is_empty());

    ActiveTrack {
        id,
        description,
        line: line.trim().to_string(),
    }
}
