pub mod conductor_dir;
pub mod fanout;
pub mod handoff;
pub mod session_log;
pub mod state;
pub mod usage;
pub mod worktrees;

// Re-export commonly used config functions
pub use conductor_dir::{load_config, Config, ConductorDir};
