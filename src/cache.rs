//! All-or-nothing metadata cache.
//!
//! When the cache file exists its contents are returned as-is and the sources
//! API is not contacted. It is never invalidated automatically.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Error;
use crate::metadata::PackageRecord;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to read cache '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write cache '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize cache: {0}")]
    Serialize(serde_json::Error),

    #[error("malformed cache '{path}': {source}")]
    Deserialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Returns the cached package list at `path`, or runs `fetch` and persists its
/// output there. Without a path, `fetch` runs and nothing is written.
pub fn load_or_fetch<F>(path: Option<&Path>, fetch: F) -> Result<Vec<PackageRecord>, Error>
where
    F: FnOnce() -> Result<Vec<PackageRecord>, Error>,
{
    match path {
        Some(path) if path.exists() => {
            let packages = load(path)?;
            info!(path = %path.display(), packages = packages.len(), "loaded metadata from cache");
            Ok(packages)
        }
        Some(path) => {
            let packages = fetch()?;
            store(path, &packages)?;
            info!(path = %path.display(), packages = packages.len(), "wrote metadata cache");
            Ok(packages)
        }
        None => fetch(),
    }
}

pub fn load(path: &Path) -> Result<Vec<PackageRecord>, CacheError> {
    let content = fs::read_to_string(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CacheError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

pub fn store(path: &Path, packages: &[PackageRecord]) -> Result<(), CacheError> {
    let content = serde_json::to_string_pretty(packages).map_err(CacheError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CacheError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    })
}
