//! Session state and handoff tracking for Conductor projects.
//!
//! Conductor keeps long-running track progress on disk so that a fresh agent
//! session can pick up where a context-exhausted one stopped. This crate
//! provides the Claude Code hooks that estimate context use, signal when a
//! handoff is due, and brief a new session on where to resume.

pub mod commands;
pub mod fs;
pub mod hooks;
pub mod models;
pub mod parser;
