use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::path::PathBuf;

use crate::metadata::PackageRecord;

/// Per-package outcome written to the results file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// 1 when a keyword was found in the sources, else 0.
    Keyword(u8),
    /// Object files found in an extracted `.deb`.
    ObjectFiles(Vec<PathBuf>),
}

impl Flag {
    pub fn keyword(found: bool) -> Self {
        Self::Keyword(u8::from(found))
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Keyword(found) => serializer.serialize_u8(*found),
            // Non-UTF-8 names are written lossily.
            Self::ObjectFiles(paths) => {
                serializer.collect_seq(paths.iter().map(|path| path.to_string_lossy()))
            }
        }
    }
}

/// Serialized as `[name, dominant_language, version, source_page_url, flag]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub name: String,
    pub dominant_language: String,
    pub version: String,
    pub source_page_url: String,
    pub flag: Flag,
}

impl ResultRecord {
    pub fn new(package: &PackageRecord, flag: Flag) -> Self {
        Self {
            name: package.name.clone(),
            dominant_language: package.dominant_language.clone(),
            version: package.version.clone(),
            source_page_url: package.source_page_url.clone(),
            flag,
        }
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(5)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.dominant_language)?;
        tuple.serialize_element(&self.version)?;
        tuple.serialize_element(&self.source_page_url)?;
        tuple.serialize_element(&self.flag)?;
        tuple.end()
    }
}
