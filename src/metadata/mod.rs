//! Package discovery against the sources API.
//!
//! The fetcher lists every package, looks up the latest version of each, and
//! keeps those whose dominant language (the first `sloc` entry) is selected.
//! A failure for one package is logged and skipped; only the initial listing
//! and an invalid language selection abort the fetch.

pub mod api;
pub mod filter;
mod record;

pub use filter::LanguageFilter;
pub use record::PackageRecord;

use tracing::{debug, error, info};

use crate::config::Endpoints;
use crate::error::{Error, FetchError};
use crate::http::HttpClient;
use crate::languages::{LanguageMap, LanguageSelection};
use api::{PackageInfo, PackageList, VersionList};

/// What happened to a single package during discovery.
#[derive(Debug)]
pub enum MetadataOutcome {
    Accepted(PackageRecord),
    Rejected { language: String },
    Skipped(FetchError),
}

#[derive(Debug)]
pub struct MetadataSkip {
    pub package: String,
    pub error: FetchError,
}

#[derive(Debug, Default)]
pub struct MetadataReport {
    pub packages: Vec<PackageRecord>,
    pub rejected: usize,
    pub skipped: Vec<MetadataSkip>,
}

pub struct MetadataFetcher<'a, C: HttpClient> {
    client: &'a C,
    endpoints: &'a Endpoints,
    languages: &'a LanguageMap,
}

impl<'a, C: HttpClient> MetadataFetcher<'a, C> {
    pub fn new(client: &'a C, endpoints: &'a Endpoints, languages: &'a LanguageMap) -> Self {
        Self {
            client,
            endpoints,
            languages,
        }
    }

    /// Resolves `ids` against the language map, then discovers matching packages.
    ///
    /// An unknown identifier fails before any request is made.
    pub fn fetch<S: AsRef<str>>(&self, ids: &[S]) -> Result<MetadataReport, Error> {
        let selection = self.languages.select(ids).inspect_err(|e| {
            error!(error = %e, "invalid language selection");
        })?;
        self.fetch_selected(&selection)
    }

    pub fn fetch_selected(&self, selection: &LanguageSelection) -> Result<MetadataReport, Error> {
        let list: PackageList = self.client.get_json(&self.endpoints.package_list())?;
        let total = list.packages.len();
        info!(total, "fetched package list");

        let filter = LanguageFilter::new(selection);
        let mut report = MetadataReport::default();

        for (index, package) in list.packages.into_iter().enumerate() {
            debug!(package = %package.name, index = index + 1, total, "fetching metadata");
            match self.describe(&package.name, &filter) {
                MetadataOutcome::Accepted(record) => report.packages.push(record),
                MetadataOutcome::Rejected { language } => {
                    debug!(package = %package.name, %language, "dominant language not selected");
                    report.rejected += 1;
                }
                MetadataOutcome::Skipped(error) => {
                    info!(package = %package.name, %error, "Non-fatal error for package, skipping");
                    report.skipped.push(MetadataSkip {
                        package: package.name,
                        error,
                    });
                }
            }
        }

        info!(
            kept = report.packages.len(),
            rejected = report.rejected,
            skipped = report.skipped.len(),
            "metadata fetch complete"
        );
        Ok(report)
    }

    /// Looks up the latest version and dominant language of one package.
    pub fn describe(&self, name: &str, filter: &LanguageFilter<'_>) -> MetadataOutcome {
        match self.lookup(name) {
            Ok((version, language)) if filter.accepts(&language) => {
                MetadataOutcome::Accepted(PackageRecord {
                    name: name.to_string(),
                    dominant_language: language,
                    version,
                    source_page_url: self.endpoints.source_page(name),
                })
            }
            Ok((_, language)) => MetadataOutcome::Rejected { language },
            Err(error) => MetadataOutcome::Skipped(error),
        }
    }

    fn lookup(&self, name: &str) -> Result<(String, String), FetchError> {
        let versions_url = self.endpoints.package_versions(name);
        let versions: VersionList = self.client.get_json(&versions_url)?;
        let version = versions
            .latest()
            .ok_or_else(|| FetchError::missing_field(&versions_url, "versions[0]"))?
            .to_string();

        let info_url = self.endpoints.package_info(name, &version);
        let info: PackageInfo = self.client.get_json(&info_url)?;
        let language = info
            .dominant_language()
            .ok_or_else(|| FetchError::missing_field(&info_url, "pkg_infos.sloc[0]"))?
            .to_string();

        Ok((version, language))
    }
}
