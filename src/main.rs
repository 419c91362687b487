use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use conductor::commands::hooks;

mod cli;

use cli::{Cli, Commands, HooksCommands};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "CONDUCTOR_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the hook envelope, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hook { kind } => {
            hooks::run(kind.into(), io::stdin().lock(), io::stdout().lock(), io::stderr())
        }
        Commands::Hooks { command } => match command {
            HooksCommands::Config => hooks::config(),
            HooksCommands::List => hooks::list(),
        },
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "conductor failed");
            ExitCode::FAILURE
        }
    }
}
