#![allow(dead_code)]

use debscan::error::{ExtractError, FetchError};
use debscan::fetch::DebExtractor;
use debscan::http::HttpClient;
use debscan::{Endpoints, PackageRecord};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const SOURCES_API: &str = "https://sources.test/api";
pub const PACKAGES_SITE: &str = "https://packages.test";
pub const MIRROR: &str = "http://ftp.us.debian.org/debian/pool/main";

pub fn get_test_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_page(name: &str) -> String {
    fs::read_to_string(get_test_fixture_path("pages").join(name)).unwrap()
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(SOURCES_API, PACKAGES_SITE)
}

pub fn tarball_url(package: &str) -> String {
    format!("{MIRROR}/{}/{package}/{package}_1.0.orig.tar.gz", &package[..1])
}

pub fn deb_url(package: &str) -> String {
    format!("{MIRROR}/{}/{package}/{package}_1.0_amd64.deb", &package[..1])
}

pub fn source_page(package: &str) -> String {
    read_page("source_page.html").replace("{{TARBALL_URL}}", &tarball_url(package))
}

pub fn deb_page(package: &str) -> String {
    read_page("deb_download.html")
        .replace("{{DEB_URL}}", &deb_url(package))
        .replace("{{DEB_NAME}}", &format!("{package}_1.0_amd64.deb"))
}

pub fn package(name: &str) -> PackageRecord {
    PackageRecord::new(name, "ansic", "1.0-1", endpoints().source_page(name))
}

/// Builds an in-memory `.tar.gz` holding `entries`.
pub fn gzip_tarball(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, *data).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap()
}

/// HTTP client answering from a fixed URL table and recording every request.
#[derive(Default)]
pub struct MockClient {
    responses: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }

    pub fn with_json(self, url: impl Into<String>, value: serde_json::Value) -> Self {
        self.with(url, value.to_string())
    }

    /// Registers a source page and tarball for `package`.
    pub fn with_tarball(self, package: &str, entries: &[(&str, &[u8])]) -> Self {
        let page_url = endpoints().source_page(package);
        self.with(page_url, source_page(package))
            .with(tarball_url(package), gzip_tarball(entries))
    }

    /// Registers a download page and a placeholder `.deb` for `package`.
    pub fn with_deb(self, package: &str) -> Self {
        let page_url = endpoints().deb_download_page(package);
        self.with(page_url, deb_page(package))
            .with(deb_url(package), b"!<arch>\ndebian-binary".to_vec())
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &str) -> Result<&Vec<u8>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .ok_or_else(|| FetchError::status(url, 404))
    }
}

impl HttpClient for MockClient {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.respond(url)
            .map(|body| String::from_utf8_lossy(body).into_owned())
    }

    fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let body = self.respond(url)?;
        fs::write(dest, body).map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })
    }
}

/// Stands in for `dpkg-deb`: lays out a small binary package.
pub struct FakeDpkg;

impl DebExtractor for FakeDpkg {
    fn extract(&self, deb: &Path, dest: &Path) -> Result<(), ExtractError> {
        assert!(deb.is_file(), "deb must be downloaded before extraction");
        let lib = dest.join("usr/lib/x86_64-linux-gnu");
        let doc = dest.join("usr/share/doc/pkg");
        for dir in [&lib, &doc] {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(lib.join("libpkg.so.1"), b"\x7fELF\x02\x01\x01\x00").unwrap();
        fs::write(doc.join("copyright"), b"Format: https://www.debian.org/doc/").unwrap();
        Ok(())
    }
}

/// `dpkg-deb` that always fails.
pub struct BrokenDpkg;

impl DebExtractor for BrokenDpkg {
    fn extract(&self, deb: &Path, _dest: &Path) -> Result<(), ExtractError> {
        Err(ExtractError::Spawn {
            tool: "dpkg-deb".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, deb.display().to_string()),
        })
    }
}
