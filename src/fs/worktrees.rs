//! Detection of leftover concurrent-work directories.

use std::fs;

use super::conductor_dir::ConductorDir;

/// Number of sub-directories in `.worktrees/`, each possibly orphaned work.
pub fn count_worktrees(dir: &ConductorDir) -> usize {
    match fs::read_dir(dir.worktrees_dir()) {
        Ok(entries) => entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .count(),
        Err(_) => 0,
    }
}
