mod suffix;

pub use suffix::suffix_chain;

use memchr::memmem;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::IoError;

/// Raw byte-substring search over files with accepted suffix chains.
///
/// With no keywords, any qualifying file is a match.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    extensions: BTreeSet<String>,
    keywords: Vec<Vec<u8>>,
}

impl KeywordScanner {
    pub fn new<E, K>(extensions: E, keywords: K) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<[u8]>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_vec())
                .collect(),
        }
    }

    pub fn qualifies(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.extensions.contains(&suffix_chain(&name.to_string_lossy())))
            .unwrap_or(false)
    }

    pub fn matches(&self, content: &[u8]) -> bool {
        self.keywords.is_empty()
            || self
                .keywords
                .iter()
                .any(|keyword| memmem::find(content, keyword).is_some())
    }

    /// True when some qualifying regular file under `root` matches.
    pub fn scan(&self, root: &Path) -> Result<bool, IoError> {
        let mut scanned = 0usize;

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
            if !entry.file_type().is_file() || !self.qualifies(entry.path()) {
                continue;
            }

            scanned += 1;
            let content = fs::read(entry.path()).map_err(|e| IoError::read_error(entry.path(), e))?;
            if self.matches(&content) {
                debug!(file = %entry.path().display(), scanned, "keyword match");
                return Ok(true);
            }
            trace!(file = %entry.path().display(), "no match");
        }

        debug!(root = %root.display(), scanned, "no keyword match");
        Ok(false)
    }
}
