use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::constants::{MAX_TASKS_PER_SESSION, THRESHOLD_CACHE_TTL};

/// Estimator settings from `conductor/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_tasks_per_session: u32,
    pub threshold_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tasks_per_session: MAX_TASKS_PER_SESSION,
            threshold_cache_ttl: THRESHOLD_CACHE_TTL,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    context: RawContextSection,
}

#[derive(Debug, Default, Deserialize)]
struct RawContextSection {
    max_tasks_per_session: Option<u32>,
    threshold_cache_ttl_secs: Option<u64>,
}

impl Config {
    /// Parse config.toml content, filling unset keys with defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).context("Failed to parse config.toml")?;
        let defaults = Config::default();

        Ok(Self {
            max_tasks_per_session: raw
                .context
                .max_tasks_per_session
                .unwrap_or(defaults.max_tasks_per_session)
                .max(1),
            threshold_cache_ttl: raw
                .context
                .threshold_cache_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.threshold_cache_ttl),
        })
    }
}

/// Load config.toml from a conductor directory
///
/// # Returns
/// * `Ok(Some(Config))` - Config loaded and parsed successfully
/// * `Ok(None)` - Config file doesn't exist
/// * `Err(_)` - Failed to read or parse config
pub fn load_config(conductor_dir: &Path) -> Result<Option<Config>> {
    let config_path = conductor_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).context("Failed to read config.toml")?;

    Config::from_toml(&content).map(Some)
}

/// Paths of the on-disk layout rooted at a project directory.
///
/// ```text
/// conductor/
///   tracks.md
///   workflow.md
///   config.toml
///   .context_usage
///   .conductor_session_log
///   tracks/<track-id>/plan.md
///   tracks/<track-id>/handoff-state.json
/// .worktrees/
/// ```
#[derive(Debug, Clone)]
pub struct ConductorDir {
    project_root: PathBuf,
    root: PathBuf,
}

impl ConductorDir {
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        let root = project_root.join("conductor");
        Self { project_root, root }
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn tracks_file(&self) -> PathBuf {
        self.root.join("tracks.md")
    }

    pub fn workflow_file(&self) -> PathBuf {
        self.root.join("workflow.md")
    }

    pub fn usage_file(&self) -> PathBuf {
        self.root.join(".context_usage")
    }

    pub fn session_log(&self) -> PathBuf {
        self.root.join(".conductor_session_log")
    }

    pub fn tracks_dir(&self) -> PathBuf {
        self.root.join("tracks")
    }

    pub fn track_dir(&self, track_id: &str) -> PathBuf {
        self.tracks_dir().join(track_id)
    }

    pub fn plan_file(&self, track_id: &str) -> PathBuf {
        self.track_dir(track_id).join("plan.md")
    }

    pub fn handoff_file(&self, track_id: &str) -> PathBuf {
        self.track_dir(track_id).join("handoff-state.json")
    }

    pub fn worktrees_dir(&self) -> PathBuf {
        self.project_root.join(".worktrees")
    }

    /// Load config.toml; an unreadable or invalid file yields defaults.
    pub fn config(&self) -> Config {
        match load_config(&self.root) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "ignoring invalid conductor config");
                Config::default()
            }
        }
    }
}
