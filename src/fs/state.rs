//! Reading and writing persisted JSON records.
//!
//! Reads distinguish "not there" from "unreadable" from "garbage" internally,
//! but callers of [`load_json`] only see presence or absence.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a file as text, mapping `NotFound` to its own variant.
pub fn read_text(path: &Path) -> Result<String, StateError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StateError::NotFound(path.to_path_buf())
        } else {
            StateError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read and deserialize a JSON record.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StateError> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| StateError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Collapse a state read into `Option`, logging why it was absent.
pub fn collapse<T>(result: Result<T, StateError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(StateError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "state file absent");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unusable state file");
            None
        }
    }
}

/// Text contents, or `None` when missing or unreadable.
pub fn load_text(path: &Path) -> Option<String> {
    collapse(read_text(path))
}

/// Deserialized record, or `None` when missing or malformed.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    collapse(read_json(path))
}

/// Replace a JSON record as a whole document.
///
/// Writes a sibling temp file and renames it over the target, so readers see
/// either the old or the new record, never a torn one.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize record")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()));

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}
