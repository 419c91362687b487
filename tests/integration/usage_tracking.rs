//! Context usage estimation across hook invocations

use conductor::commands::hooks::{dispatch, HookKind};
use conductor::fs::usage::load_usage;
use conductor::models::UsageRecord;
use serde_json::Value;
use std::fs;

use super::fixtures::Project;

fn additional_context(stdout: &str) -> String {
    let value: Value = serde_json::from_str(stdout).unwrap();
    value["hookSpecificOutput"]["additionalContext"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_notice_emitted_once_threshold_reached() {
    let project = Project::standard();
    let payload = project.payload("session-a", "Task");

    for _ in 0..6 {
        let result = dispatch(HookKind::ContextThreshold, &payload).unwrap();
        assert!(result.is_empty());
    }

    let result = dispatch(HookKind::ContextThreshold, &payload).unwrap();
    let context = additional_context(result.stdout.as_deref().unwrap());
    assert!(context.contains("(70% estimated, threshold: 70%)"));

    let record = load_usage(&project.dir.usage_file()).unwrap();
    assert_eq!(record.task_completions, 7);
    assert_eq!(record.estimated_percent, 70);
    assert_eq!(record.session_id, "session-a");
}

#[test]
fn test_estimate_saturates_at_100() {
    let project = Project::standard();
    let payload = project.payload("session-a", "Task");

    for _ in 0..15 {
        dispatch(HookKind::ContextThreshold, &payload).unwrap();
    }

    let record = load_usage(&project.dir.usage_file()).unwrap();
    assert_eq!(record.task_completions, 15);
    assert_eq!(record.estimated_percent, 100);
}

#[test]
fn test_other_tools_do_not_count() {
    let project = Project::standard();

    dispatch(HookKind::ContextThreshold, &project.payload("s", "Task")).unwrap();
    let before = fs::read_to_string(project.dir.usage_file()).unwrap();

    for tool in ["Bash", "Edit", "Read", ""] {
        let result = dispatch(HookKind::ContextThreshold, &project.payload("s", tool)).unwrap();
        assert!(result.is_empty());
    }

    assert_eq!(fs::read_to_string(project.dir.usage_file()).unwrap(), before);
}

#[test]
fn test_new_session_resets_count() {
    let project = Project::standard();

    for _ in 0..5 {
        dispatch(HookKind::ContextThreshold, &project.payload("first", "Task")).unwrap();
    }
    let first = load_usage(&project.dir.usage_file()).unwrap();

    dispatch(HookKind::ContextThreshold, &project.payload("second", "Task")).unwrap();
    let second = load_usage(&project.dir.usage_file()).unwrap();

    assert_eq!(second.session_id, "second");
    assert_eq!(second.task_completions, 1);
    assert_eq!(second.estimated_percent, 10);
    assert!(second.started_at >= first.started_at);
}

#[test]
fn test_record_round_trips_within_session() {
    let project = Project::standard();
    dispatch(HookKind::ContextThreshold, &project.payload("s", "Task")).unwrap();

    let raw = fs::read_to_string(project.dir.usage_file()).unwrap();
    let parsed: UsageRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(load_usage(&project.dir.usage_file()), Some(parsed));
}

#[test]
fn test_missing_session_id_uses_unknown() {
    let project = Project::standard();
    let payload = serde_json::json!({
        "cwd": project.root().to_string_lossy(),
        "tool_name": "Task",
    })
    .to_string();

    dispatch(HookKind::ContextThreshold, &payload).unwrap();
    let record = load_usage(&project.dir.usage_file()).unwrap();
    assert_eq!(record.session_id, "unknown");
}
