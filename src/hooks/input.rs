//! Hook payload read from stdin.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

use crate::models::constants::UNKNOWN_SESSION_ID;

/// Fields of the host payload the handlers use. Everything is optional and a
/// field of the wrong type reads as absent; accessors apply the fallbacks.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HookInput {
    #[serde(default, deserialize_with = "string_or_none")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Option<Value>,
}

impl HookInput {
    /// Parse a payload. Blank input is an empty payload.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).context("Failed to parse hook input as JSON")
    }

    /// Project root: `cwd` from the payload, else the process directory.
    pub fn project_root(&self) -> PathBuf {
        match non_empty(self.cwd.as_deref()) {
            Some(cwd) => PathBuf::from(cwd),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn session_id(&self) -> &str {
        non_empty(self.session_id.as_deref()).unwrap_or(UNKNOWN_SESSION_ID)
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("")
    }

    /// `tool_input.file_path`, when the tool carried one.
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input
            .as_ref()
            .and_then(|input| input.get("file_path"))
            .and_then(Value::as_str)
            .and_then(|path| non_empty(Some(path)))
    }
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
