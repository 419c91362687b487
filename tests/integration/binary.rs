//! End-to-end runs of the compiled binary over stdin/stdout

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use super::fixtures::Project;

fn run_hook(kind: &str, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_conductor"))
        .args(["hook", kind])
        .env("CONDUCTOR_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn conductor");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_session_start_prints_envelope() {
    let project = Project::standard();
    let output = run_hook("session-start", &project.payload("s1", ""));

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["hookSpecificOutput"]["hookEventName"], "SessionStart");
    let context = value["hookSpecificOutput"]["additionalContext"]
        .as_str()
        .unwrap();
    assert!(context.contains("**Current Track:** User authentication (auth_20250102)"));
}

#[test]
fn test_noop_exits_zero_without_output() {
    let project = Project::standard();
    let output = run_hook("context-threshold", &project.payload("s1", "Bash"));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_track_changes_appends_log() {
    let project = Project::standard();
    let payload = serde_json::json!({
        "cwd": project.root().to_string_lossy(),
        "tool_name": "Edit",
        "tool_input": {"file_path": "conductor/tracks/auth_20250102/plan.md"},
    })
    .to_string();

    let output = run_hook("track-changes", &payload);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let log = std::fs::read_to_string(project.dir.session_log()).unwrap();
    assert!(log.ends_with(": Modified conductor/tracks/auth_20250102/plan.md\n"));
}

#[test]
fn test_session_end_writes_stderr_only() {
    let project = Project::standard();
    let output = run_hook("session-end", &project.payload("s1", ""));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 track(s) still in progress."));
}

#[test]
fn test_malformed_input_exits_nonzero() {
    let output = run_hook("session-start", "{not json");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
