//! Integration tests for conductor hooks
//!
//! Each test builds a throwaway project tree and drives the public API or the
//! compiled binary against it.

mod binary;
mod fixtures;
mod resumption;
mod usage_tracking;
