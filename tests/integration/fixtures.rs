//! Project tree builders shared by the integration tests

use conductor::fs::ConductorDir;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const LEDGER: &str = "\
# Project Tracks

- [completed] **Track: Scaffolding** [scaffold_20250101]
- [in-progress] **Track: User authentication** [auth_20250102]
- [pending] **Track: Billing** [billing_20250103]
";

pub const AUTH_PLAN: &str = "\
# Plan: User authentication

## Phase 1: Setup [checkpoint: 9f8e7d6]
- [x] Task: Add dependencies
- [x] Task: Create user table

## Phase 2: Login flow
- [x] Task: Password hashing
- [~] Task: Session cookies
- [ ] Task: Logout endpoint
";

pub const WORKFLOW: &str = "\
# Workflow

| Setting | Purpose | Value |
|---------|---------|-------|
| Context Threshold | Handoff trigger | `70%` |
";

pub struct Project {
    pub temp_dir: TempDir,
    pub dir: ConductorDir,
}

impl Project {
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let dir = ConductorDir::new(temp_dir.path());
        fs::create_dir_all(dir.root()).unwrap();
        Self { temp_dir, dir }
    }

    /// Ledger, workflow and the active track's plan
    pub fn standard() -> Self {
        let project = Self::empty();
        project.write("conductor/tracks.md", LEDGER);
        project.write("conductor/workflow.md", WORKFLOW);
        project.write("conductor/tracks/auth_20250102/plan.md", AUTH_PLAN);
        fs::create_dir_all(project.dir.track_dir("scaffold_20250101")).unwrap();
        fs::create_dir_all(project.dir.track_dir("billing_20250103")).unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn payload(&self, session_id: &str, tool_name: &str) -> String {
        serde_json::json!({
            "cwd": self.root().to_string_lossy(),
            "session_id": session_id,
            "tool_name": tool_name,
        })
        .to_string()
    }
}
