//! SessionStart hook: compose the resumption brief.
//!
//! Gathering (I/O) and composing (pure) are split so the brief is a function
//! of the snapshot alone; identical persisted state yields identical output.

use anyhow::Result;

use super::{HookEvent, HookInput, HookResult};
use crate::fs::fanout::join2;
use crate::fs::handoff::{find_pending_handoff, list_track_ids};
use crate::fs::state::load_text;
use crate::fs::worktrees::count_worktrees;
use crate::fs::ConductorDir;
use crate::models::{NextTask, PendingHandoff, TrackRegistry};
use crate::parser::{find_next_task, parse_track_registry};

/// Everything the brief is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// `None` when `tracks.md` is missing or unreadable
    pub registry: Option<TrackRegistry>,
    pub next_task: Option<NextTask>,
    pub handoff: Option<PendingHandoff>,
    pub orphaned_worktrees: usize,
}

/// Read project state needed for the brief.
///
/// Returns `None` when the project has no `conductor/` directory.
pub fn gather(dir: &ConductorDir) -> Option<SessionSnapshot> {
    if !dir.exists() {
        tracing::debug!(root = %dir.project_root().display(), "not a conductor project");
        return None;
    }

    let (ledger, (track_ids, orphaned_worktrees)) = join2(
        || load_text(&dir.tracks_file()),
        || join2(|| list_track_ids(dir), || count_worktrees(dir)),
    );

    let registry = ledger.as_deref().map(parse_track_registry);
    let active_id = registry
        .as_ref()
        .and_then(|r| r.active.as_ref())
        .and_then(|a| a.id.clone());

    let (next_task, handoff) = join2(
        || {
            active_id
                .as_deref()
                .and_then(|id| load_text(&dir.plan_file(id)))
                .and_then(|plan| find_next_task(&plan))
        },
        || find_pending_handoff(dir, &track_ids, active_id.as_deref()),
    );

    Some(SessionSnapshot {
        registry,
        next_task,
        handoff,
        orphaned_worktrees,
    })
}

/// Build the brief. Each section is independent; `None` when no section has
/// anything to say.
pub fn compose_brief(snapshot: &SessionSnapshot) -> Option<String> {
    let mut sections: Vec<String> = Vec::new();

    if let Some(registry) = &snapshot.registry {
        sections.push(format_counts_section(registry));

        if let Some(active) = &registry.active {
            let mut current = format!("**Current Track:** {}\n", active.label());
            if let Some(next) = &snapshot.next_task {
                current.push_str(&format_next_task_line(next));
            }
            sections.push(current);
        }
    }

    if let Some(handoff) = &snapshot.handoff {
        sections.push(format_handoff_section(handoff));
    }

    if snapshot.orphaned_worktrees > 0 {
        sections.push(format_worktrees_section(snapshot.orphaned_worktrees));
    }

    if sections.is_empty() {
        return None;
    }

    let mut brief = String::from("## Conductor Project Detected\n\n");
    brief.push_str(&sections.join("\n"));
    Some(brief)
}

fn format_counts_section(registry: &TrackRegistry) -> String {
    let counts = &registry.counts;
    format!(
        "**Tracks:** {} total ({} completed, {} in-progress, {} pending)\n",
        counts.total(),
        counts.completed,
        counts.in_progress,
        counts.pending
    )
}

fn format_next_task_line(next: &NextTask) -> String {
    let verb = next.status.resume_verb();
    match &next.phase {
        Some(phase) => format!("**{verb}:** {} (Phase: {phase})\n", next.task),
        None => format!("**{verb}:** {}\n", next.task),
    }
}

fn format_handoff_section(handoff: &PendingHandoff) -> String {
    let mut content = String::new();
    content.push_str(&format!(
        "**⚠️ Handoff Pending:** Track '{}' was paused at {}% context threshold.\n",
        handoff.track_id,
        handoff.state.threshold_percent()
    ));
    content.push_str(&format!("**Next Task:** {}\n", handoff.state.next_task()));
    content.push_str("**Resume:** Run `/conductor:implement` to continue.\n");
    content
}

fn format_worktrees_section(count: usize) -> String {
    let noun = if count == 1 { "directory" } else { "directories" };
    format!(
        "**⚠️ Orphaned Worktrees:** {count} {noun} in .worktrees/ may hold abandoned work. \
         Review before starting new tracks.\n"
    )
}

/// Hook entry point.
pub fn run(input: &HookInput) -> Result<HookResult> {
    let dir = ConductorDir::new(input.project_root());

    let brief = gather(&dir).and_then(|snapshot| compose_brief(&snapshot));

    Ok(match brief {
        Some(brief) => HookResult::context(HookEvent::SessionStart, &brief),
        None => HookResult::empty(),
    })
}
