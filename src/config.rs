use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Args;

pub const DEFAULT_SOURCES_API: &str = "https://sources.debian.org/api";
pub const DEFAULT_PACKAGES_SITE: &str = "https://packages.debian.org";
pub const DEFAULT_SUITE: &str = "sid";
pub const DEFAULT_ARCH: &str = "amd64";
pub const DEFAULT_MIRROR_MARKER: &str = "ftp.us.debian.org/debian/pool";
pub const DEFAULT_CACHE_FILE: &str = "cache.json";

/// Marker identifying source tarball links on a source page.
pub const TARBALL_MARKER: &str = "orig.tar.gz";

/// Which artifact is fetched for each package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `.orig.tar.gz` sources, scanned for keywords.
    Tarball,
    /// Binary `.deb` archives, scanned for object files.
    Deb,
}

/// URLs of the sources API and the package index site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sources_api: String,
    pub packages_site: String,
    pub suite: String,
    pub arch: String,
    pub mirror_marker: String,
}

impl Endpoints {
    pub fn new(sources_api: &str, packages_site: &str) -> Self {
        Self {
            sources_api: sources_api.trim_end_matches('/').to_string(),
            packages_site: packages_site.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn package_list(&self) -> String {
        format!("{}/list/", self.sources_api)
    }

    pub fn package_versions(&self, package: &str) -> String {
        format!("{}/src/{package}/", self.sources_api)
    }

    pub fn package_info(&self, package: &str, version: &str) -> String {
        format!("{}/info/package/{package}/{version}/", self.sources_api)
    }

    pub fn source_page(&self, package: &str) -> String {
        format!("{}/source/{}/{package}", self.packages_site, self.suite)
    }

    pub fn deb_download_page(&self, package: &str) -> String {
        format!(
            "{}/{}/{}/{package}/download",
            self.packages_site, self.suite, self.arch
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sources_api: DEFAULT_SOURCES_API.to_string(),
            packages_site: DEFAULT_PACKAGES_SITE.to_string(),
            suite: DEFAULT_SUITE.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            mirror_marker: DEFAULT_MIRROR_MARKER.to_string(),
        }
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub languages: Vec<String>,
    pub sample_size: usize,
    pub cache: Option<PathBuf>,
    pub target: PathBuf,
    pub keywords: Vec<String>,
    pub mode: Mode,
    pub endpoints: Endpoints,
    pub language_map: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl RunConfig {
    pub fn from_args(args: &Args) -> Self {
        let endpoints = Endpoints {
            suite: args.suite.clone(),
            arch: args.arch.clone(),
            mirror_marker: args.mirror_marker.clone(),
            ..Endpoints::new(&args.sources_api, &args.packages_site)
        };

        Self {
            languages: args.languages.clone(),
            sample_size: args.sample_size,
            cache: args.cache.clone(),
            target: args
                .target
                .clone()
                .unwrap_or_else(|| PathBuf::from(uuid::Uuid::new_v4().to_string())),
            keywords: args.keywords.clone(),
            mode: if args.debs { Mode::Deb } else { Mode::Tarball },
            endpoints,
            language_map: args.language_map.clone(),
            timeout: args.timeout.map(Duration::from_secs),
        }
    }

    pub fn keyword_bytes(&self) -> Vec<Vec<u8>> {
        self.keywords.iter().map(|k| k.as_bytes().to_vec()).collect()
    }
}
