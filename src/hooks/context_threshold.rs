//! PostToolUse hook: estimate context use and signal a handoff.
//!
//! Hooks cannot see token counts, so completed `Task` delegations stand in
//! for context growth. The estimate is deliberately coarse.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::time::Instant;

use super::{HookEvent, HookInput, HookResult};
use crate::fs::fanout::join2;
use crate::fs::handoff::clear_handoff;
use crate::fs::state::load_text;
use crate::fs::usage::{load_usage, save_usage};
use crate::fs::{Config, ConductorDir};
use crate::models::{UsageEvent, UsageRecord};
use crate::parser::{parse_track_registry, ThresholdCache};

/// Outcome of one tracked event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdCheck {
    pub record: UsageRecord,
    pub threshold: u8,
}

impl ThresholdCheck {
    pub fn reached(&self) -> bool {
        self.record.estimated_percent >= self.threshold
    }
}

/// Notice injected once the estimate meets the threshold.
pub fn format_threshold_notice(estimated_percent: u8, threshold: u8) -> String {
    format!(
        r#"⚠️ **CONTEXT THRESHOLD REACHED** ({estimated_percent}% estimated, threshold: {threshold}%)

You MUST now execute the Context Handoff Protocol from implement.md:
1. Announce threshold reached
2. Create checkpoint commit
3. Write handoff-state.json
4. Output handoff prompt to user
5. STOP execution - do NOT continue to next task

Read conductor/.context_usage for details."#
    )
}

/// Count one event against the session and persist the new record.
///
/// Returns `None` without touching disk for untracked events or projects
/// without a `workflow.md`.
pub fn track_event(
    dir: &ConductorDir,
    config: &Config,
    session_id: &str,
    event: UsageEvent,
    cache: &mut ThresholdCache,
    now: DateTime<Utc>,
) -> Result<Option<ThresholdCheck>> {
    if !event.is_tracked() {
        return Ok(None);
    }

    let (prior, workflow) = join2(
        || load_usage(&dir.usage_file()),
        || load_text(&dir.workflow_file()),
    );
    let Some(workflow) = workflow else {
        tracing::debug!("no workflow.md; skipping usage tracking");
        return Ok(None);
    };

    let new_session = prior
        .as_ref()
        .is_some_and(|record| record.session_id != session_id);

    let Some(record) = UsageRecord::advance(
        prior,
        session_id,
        event,
        config.max_tasks_per_session,
        now,
    ) else {
        return Ok(None);
    };

    let threshold = cache.resolve(Instant::now(), &workflow);

    if new_session {
        consume_active_handoff(dir);
    }

    save_usage(&dir.usage_file(), &record)?;

    tracing::debug!(
        session_id,
        completions = record.task_completions,
        estimated_percent = record.estimated_percent,
        threshold,
        "context usage updated"
    );

    Ok(Some(ThresholdCheck { record, threshold }))
}

/// A new session doing tracked work has resumed the active track, so its
/// pending handoff is spent.
fn consume_active_handoff(dir: &ConductorDir) {
    let Some(ledger) = load_text(&dir.tracks_file()) else {
        return;
    };
    let Some(track_id) = parse_track_registry(&ledger).active.and_then(|a| a.id) else {
        return;
    };

    match clear_handoff(dir, &track_id) {
        Ok(true) => tracing::info!(track_id = %track_id, "handoff consumed by new session"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %format!("{e:#}"), "failed to consume handoff"),
    }
}

/// Hook entry point.
pub fn run(input: &HookInput) -> Result<HookResult> {
    let event = UsageEvent::from_tool_name(input.tool_name());
    if !event.is_tracked() {
        return Ok(HookResult::empty());
    }

    let dir = ConductorDir::new(input.project_root());
    let config = dir.config();
    let mut cache = ThresholdCache::new(config.threshold_cache_ttl);
    let check = track_event(
        &dir,
        &config,
        input.session_id(),
        event,
        &mut cache,
        Utc::now(),
    )?;

    Ok(match check {
        Some(check) if check.reached() => HookResult::context(
            HookEvent::PostToolUse,
            &format_threshold_notice(check.record.estimated_percent, check.threshold),
        ),
        _ => HookResult::empty(),
    })
}
