//! Usage record persistence (`conductor/.context_usage`).

use anyhow::Result;
use std::path::Path;

use super::state::{load_json, write_json};
use crate::models::UsageRecord;

/// Read the usage record; missing or corrupt files read as no record.
pub fn load_usage(path: &Path) -> Option<UsageRecord> {
    load_json(path)
}

/// Overwrite the usage record.
///
/// Read-modify-write across concurrent hook processes is not serialized: two
/// simultaneous completions may lose one increment.
pub fn save_usage(path: &Path, record: &UsageRecord) -> Result<()> {
    write_json(path, record)
}
