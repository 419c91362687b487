//! Append-only audit trail (`conductor/.conductor_session_log`).

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Format one log line: `<RFC3339 millis>: Modified <path>`.
pub fn format_modification(timestamp: DateTime<Utc>, file_path: &str) -> String {
    format!(
        "{}: Modified {file_path}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Append a line under an exclusive advisory lock.
pub fn append_line(log_path: &Path, line: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open session log: {}", log_path.display()))?;

    file.lock_exclusive()
        .with_context(|| format!("Failed to lock session log: {}", log_path.display()))?;
    let written = file.write_all(line.as_bytes());
    let _ = FileExt::unlock(&file);

    written.with_context(|| format!("Failed to append to session log: {}", log_path.display()))
}
