use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("invalid language '{id}' (options: {known})")]
    Unknown { id: String, known: String },

    #[error("no languages given")]
    Empty,

    #[error("failed to read language map '{path}': {source}")]
    MapRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse language map '{path}': {source}")]
    MapParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("language '{id}' has invalid extension '{extension}': extensions must start with '.'")]
    InvalidExtension { id: String, extension: String },
}

impl LanguageError {
    pub fn unknown<'a>(id: impl Into<String>, known: impl IntoIterator<Item = &'a str>) -> Self {
        Self::Unknown {
            id: id.into(),
            known: known.into_iter().collect::<Vec<_>>().join(","),
        }
    }
}
