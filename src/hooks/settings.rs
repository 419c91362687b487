//! Claude Code hook registration for conductor

use serde_json::{json, Value};

/// Command prefix the host runs for each hook
const HOOK_COMMAND: &str = "conductor hook";

fn command_hook(subcommand: &str) -> Value {
    json!({
        "type": "command",
        "command": format!("{HOOK_COMMAND} {subcommand}")
    })
}

/// Generate the `hooks` block for `.claude/settings.json`
pub fn conductor_hooks_config() -> Value {
    json!({
        "SessionStart": [
            {
                "hooks": [command_hook("session-start")]
            }
        ],
        "PostToolUse": [
            {
                "matcher": "Task",
                "hooks": [command_hook("context-threshold")]
            },
            {
                "matcher": "Edit|Write|MultiEdit",
                "hooks": [command_hook("track-changes")]
            }
        ],
        "Stop": [
            {
                "hooks": [command_hook("session-end")]
            }
        ]
    })
}

/// Flatten the config into `(event, matcher, command)` rows for display
pub fn hook_rows(config: &Value) -> Vec<(String, String, String)> {
    let mut rows = Vec::new();

    let Some(events) = config.as_object() else {
        return rows;
    };

    for (event, rules) in events {
        for rule in rules.as_array().into_iter().flatten() {
            let matcher = rule.get("matcher").and_then(Value::as_str).unwrap_or("*");
            let hooks = rule.get("hooks").and_then(Value::as_array);
            for hook in hooks.into_iter().flatten() {
                if let Some(cmd) = hook.get("command").and_then(Value::as_str) {
                    rows.push((event.clone(), matcher.to_string(), cmd.to_string()));
                }
            }
        }
    }

    rows
}
