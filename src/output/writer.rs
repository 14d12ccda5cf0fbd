use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::ResultRecord;
use crate::error::{IoError, Result};

pub const RESULTS_FILE: &str = "res.json";

/// Writes `records` to `<target>/res.json`, replacing any previous file.
pub fn write_results(target: &Path, records: &[ResultRecord]) -> Result<PathBuf> {
    let path = target.join(RESULTS_FILE);
    let content = serde_json::to_string_pretty(records)?;
    fs::write(&path, content).map_err(|e| IoError::write_error(&path, e))?;
    info!(path = %path.display(), results = records.len(), "wrote results");
    Ok(path)
}
