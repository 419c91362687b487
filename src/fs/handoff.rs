//! Handoff record store (`conductor/tracks/<id>/handoff-state.json`).

use anyhow::{Context, Result};
use std::fs;
use std::io;

use super::conductor_dir::ConductorDir;
use super::fanout::read_batched;
use super::state::{load_json, write_json};
use crate::models::{HandoffState, PendingHandoff};

/// File name a consumed handoff record is moved to.
const RESUMED_FILE_NAME: &str = "handoff-state.resumed.json";

/// Read a track's handoff record; missing or malformed means none pending.
pub fn load_handoff(dir: &ConductorDir, track_id: &str) -> Option<HandoffState> {
    load_json(&dir.handoff_file(track_id))
}

pub fn save_handoff(dir: &ConductorDir, track_id: &str, state: &HandoffState) -> Result<()> {
    write_json(&dir.handoff_file(track_id), state)
}

/// Mark a track's handoff as consumed by a resuming session.
///
/// The record is renamed rather than deleted. Returns `false` when there was
/// nothing to clear.
pub fn clear_handoff(dir: &ConductorDir, track_id: &str) -> Result<bool> {
    let source = dir.handoff_file(track_id);
    let dest = dir.track_dir(track_id).join(RESUMED_FILE_NAME);

    match fs::rename(&source, &dest) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| {
            format!("Failed to mark handoff consumed: {}", source.display())
        }),
    }
}

/// Track directory names under `conductor/tracks/`, sorted.
///
/// A missing directory yields an empty list.
pub fn list_track_ids(dir: &ConductorDir) -> Vec<String> {
    let entries = match fs::read_dir(dir.tracks_dir()) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(error = %e, "no tracks directory");
            return Vec::new();
        }
    };

    let mut ids: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    ids.sort();
    ids
}

/// Pick the single handoff to surface at session start.
///
/// The active track's record wins; otherwise the first track (by id order)
/// that has one. Records are read in bounded concurrent batches.
pub fn find_pending_handoff(
    dir: &ConductorDir,
    track_ids: &[String],
    active_track: Option<&str>,
) -> Option<PendingHandoff> {
    let states = read_batched(track_ids, |id| load_handoff(dir, id));

    let mut found: Vec<PendingHandoff> = track_ids
        .iter()
        .zip(states)
        .filter_map(|(id, state)| {
            state.map(|state| PendingHandoff {
                track_id: id.clone(),
                state,
            })
        })
        .collect();

    if let Some(active) = active_track {
        if let Some(pos) = found.iter().position(|h| h.track_id == active) {
            return Some(found.swap_remove(pos));
        }
    }

    if found.len() > 1 {
        tracing::debug!(count = found.len(), "several handoff records; surfacing the first");
    }

    found.into_iter().next()
}
