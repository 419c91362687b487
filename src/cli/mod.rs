//! CLI command types

use clap::{Parser, Subcommand};
use conductor::commands::hooks::HookKind;

#[derive(Parser)]
#[command(name = "conductor")]
#[command(about = "Session state and handoff hooks for Conductor projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a hook handler (reads the hook payload from stdin)
    Hook {
        #[command(subcommand)]
        kind: HookCommands,
    },

    /// Inspect hook registration
    Hooks {
        #[command(subcommand)]
        command: HooksCommands,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum HookCommands {
    /// SessionStart: inject the resumption brief
    SessionStart,

    /// PostToolUse (Task): count delegations and signal handoff at threshold
    ContextThreshold,

    /// PostToolUse (Edit/Write): log plan.md modifications
    TrackChanges,

    /// Stop: remind about tracks still in progress
    SessionEnd,
}

impl From<HookCommands> for HookKind {
    fn from(command: HookCommands) -> Self {
        match command {
            HookCommands::SessionStart => HookKind::SessionStart,
            HookCommands::ContextThreshold => HookKind::ContextThreshold,
            HookCommands::TrackChanges => HookKind::TrackChanges,
            HookCommands::SessionEnd => HookKind::SessionEnd,
        }
    }
}

#[derive(Subcommand)]
pub enum HooksCommands {
    /// Print the hooks block for .claude/settings.json
    Config,

    /// List hooks and their matchers
    List,
}
