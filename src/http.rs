use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tracing::trace;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("debscan/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP access used by every stage that talks to the network.
pub trait HttpClient: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, FetchError>;

    /// Streams the body of `url` into a new file at `dest`.
    fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError>;

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>
    where
        Self: Sized,
    {
        let body = self.get_text(url)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| FetchError::Client { source })?;
        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        trace!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::request(url, source))?;

        // An error page is a failure for the package, not a page without links.
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }
        Ok(response)
    }
}

impl HttpClient for ReqwestClient {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.send(url)?
            .text()
            .map_err(|source| FetchError::request(url, source))
    }

    fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let mut response = self.send(url)?;
        let mut file = File::create(dest).map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|source| FetchError::request(url, source))?;
        trace!(url, bytes, dest = %dest.display(), "downloaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_without_timeout() {
        assert!(ReqwestClient::new(None).is_ok());
    }

    #[test]
    fn test_client_builds_with_timeout() {
        assert!(ReqwestClient::new(Some(Duration::from_secs(5))).is_ok());
    }
}
