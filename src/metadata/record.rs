use serde::{Deserialize, Serialize};

/// A package that passed the language filter, as persisted in the cache.
///
/// Deserializes from either an object or a `[name, language, version, url]` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub dominant_language: String,
    pub version: String,
    pub source_page_url: String,
}

impl PackageRecord {
    pub fn new(
        name: impl Into<String>,
        dominant_language: impl Into<String>,
        version: impl Into<String>,
        source_page_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dominant_language: dominant_language.into(),
            version: version.into(),
            source_page_url: source_page_url.into(),
        }
    }
}
