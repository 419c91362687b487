//! Session-start brief composed from on-disk project state

use conductor::fs::handoff::save_handoff;
use conductor::hooks::session_start::{compose_brief, gather};
use conductor::models::{HandoffState, PlanTaskStatus};
use std::fs;

use super::fixtures::Project;

#[test]
fn test_brief_reports_active_track_and_interrupted_task() {
    let project = Project::standard();

    let snapshot = gather(&project.dir).unwrap();
    let next = snapshot.next_task.clone().unwrap();
    assert_eq!(next.task, "Session cookies");
    assert_eq!(next.phase.as_deref(), Some("Login flow"));
    assert_eq!(next.status, PlanTaskStatus::InProgress);

    let brief = compose_brief(&snapshot).unwrap();
    assert!(brief.starts_with("## Conductor Project Detected\n\n"));
    assert!(brief.contains("**Tracks:** 3 total (1 completed, 1 in-progress, 1 pending)"));
    assert!(brief.contains("**Current Track:** User authentication (auth_20250102)"));
    assert!(brief.contains("**Resuming:** Session cookies (Phase: Login flow)"));
    assert!(!brief.contains("Handoff Pending"));
    assert!(!brief.contains("Orphaned"));
}

#[test]
fn test_brief_is_idempotent() {
    let project = Project::standard();
    save_handoff(
        &project.dir,
        "billing_20250103",
        &HandoffState::new(72, "Invoice model"),
    )
    .unwrap();
    fs::create_dir_all(project.root().join(".worktrees/stage-1")).unwrap();

    let first = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    let second = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_active_track_handoff_takes_precedence() {
    let project = Project::standard();
    save_handoff(
        &project.dir,
        "billing_20250103",
        &HandoffState::new(72, "Invoice model"),
    )
    .unwrap();
    save_handoff(
        &project.dir,
        "auth_20250102",
        &HandoffState::new(70, "Session cookies"),
    )
    .unwrap();

    let brief = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert!(brief.contains("Track 'auth_20250102' was paused at 70% context threshold."));
    assert!(brief.contains("**Next Task:** Session cookies"));
    assert!(!brief.contains("billing_20250103"));
}

#[test]
fn test_missing_plan_keeps_other_sections() {
    let project = Project::standard();
    fs::remove_file(project.dir.plan_file("auth_20250102")).unwrap();
    save_handoff(
        &project.dir,
        "auth_20250102",
        &HandoffState::new(70, "Session cookies"),
    )
    .unwrap();

    let brief = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert!(brief.contains("**Current Track:**"));
    assert!(!brief.contains("**Resuming:**"));
    assert!(!brief.contains("**Next:**"));
    assert!(brief.contains("Handoff Pending"));
}

#[test]
fn test_missing_ledger_keeps_other_sections() {
    let project = Project::empty();
    project.write(
        "conductor/tracks/solo/handoff-state.json",
        r#"{"next_task": "Wire up CLI"}"#,
    );
    fs::create_dir_all(project.root().join(".worktrees/a")).unwrap();
    fs::create_dir_all(project.root().join(".worktrees/b")).unwrap();

    let brief = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert!(!brief.contains("**Tracks:**"));
    assert!(brief.contains("Track 'solo' was paused at 70% context threshold."));
    assert!(brief.contains("**Next Task:** Wire up CLI"));
    assert!(brief.contains("2 directories in .worktrees/"));
}

#[test]
fn test_malformed_handoff_is_treated_as_absent() {
    let project = Project::standard();
    project.write("conductor/tracks/auth_20250102/handoff-state.json", "not json");

    let brief = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert!(!brief.contains("Handoff Pending"));
    assert!(brief.contains("**Resuming:** Session cookies"));
}

#[test]
fn test_finished_plan_omits_next_task() {
    let project = Project::standard();
    project.write(
        "conductor/tracks/auth_20250102/plan.md",
        "## Phase 1: Setup\n- [x] Task: Everything\n",
    );

    let snapshot = gather(&project.dir).unwrap();
    assert!(snapshot.next_task.is_none());
    let brief = compose_brief(&snapshot).unwrap();
    assert!(brief.contains("**Current Track:**"));
}

#[test]
fn test_not_a_conductor_project() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let dir = conductor::fs::ConductorDir::new(temp_dir.path());
    assert!(gather(&dir).is_none());
}

#[test]
fn test_loosely_typed_handoff_still_reported() {
    let project = Project::standard();
    project.write(
        "conductor/tracks/auth_20250102/handoff-state.json",
        r#"{"threshold_percent": "80", "next_task": {"name": "Session cookies"}}"#,
    );

    let brief = compose_brief(&gather(&project.dir).unwrap()).unwrap();
    assert!(brief.contains("Track 'auth_20250102' was paused at 70% context threshold."));
    assert!(brief.contains("**Next Task:** Unknown"));
}
