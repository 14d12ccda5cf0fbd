use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {source}")]
    Client { source: reqwest::Error },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("{url}: {field} missing from response")]
    MissingField { url: String, field: &'static str },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to save download to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn missing_field(url: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            url: url.into(),
            field,
        }
    }
}
