//! Sequential fetch, extract and scan over the discovered packages.
//!
//! Each package is processed in isolation: any failure becomes a
//! [`SkipReason`] and the loop moves on. With a non-zero sample size the
//! package order is shuffled and the loop stops as soon as the number of
//! results *exceeds* the sample size, so a run yields at most `sample_size + 1`
//! results.

mod outcome;

pub use outcome::{PackageOutcome, PackageSkip, RunReport, SkipReason};

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::config::{Endpoints, Mode, TARBALL_MARKER};
use crate::error::{Error, IoError};
use crate::fetch::{find_object_files, first_link, unpack_tarball, DebExtractor};
use crate::http::HttpClient;
use crate::metadata::PackageRecord;
use crate::output::{Flag, ResultRecord};
use crate::scanner::KeywordScanner;

pub struct Pipeline<'a, C: HttpClient, X: DebExtractor> {
    client: &'a C,
    extractor: &'a X,
    endpoints: &'a Endpoints,
    scanner: KeywordScanner,
    target: PathBuf,
    mode: Mode,
    sample_size: usize,
}

impl<'a, C: HttpClient, X: DebExtractor> Pipeline<'a, C, X> {
    pub fn new(
        client: &'a C,
        extractor: &'a X,
        endpoints: &'a Endpoints,
        scanner: KeywordScanner,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            extractor,
            endpoints,
            scanner,
            target: target.into(),
            mode: Mode::Tarball,
            sample_size: 0,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn run<R: Rng + ?Sized>(&self, mut packages: Vec<PackageRecord>, rng: &mut R) -> RunReport {
        if self.sample_size != 0 {
            packages.shuffle(rng);
        }

        let total = packages.len();
        let mut report = RunReport::default();

        for (index, package) in packages.into_iter().enumerate() {
            debug!(package = %package.name, index = index + 1, total, "processing");

            match self.process(&package) {
                PackageOutcome::Processed(record) => report.results.push(record),
                PackageOutcome::Skipped(reason) => {
                    if reason.is_silent() {
                        debug!(package = %package.name, %reason, "skipping");
                    } else {
                        info!(package = %package.name, %reason, "Error processing package, skipping");
                    }
                    report.skipped.push(PackageSkip {
                        package: package.name,
                        reason,
                    });
                }
            }

            if self.sample_size != 0 && report.results.len() > self.sample_size {
                info!(results = report.results.len(), sample_size = self.sample_size, "sample size reached");
                report.stopped_early = true;
                break;
            }
        }

        report
    }

    pub fn process(&self, package: &PackageRecord) -> PackageOutcome {
        if !is_safe_dir_name(&package.name) {
            return PackageOutcome::Skipped(SkipReason::InvalidName);
        }

        let result = match self.mode {
            Mode::Tarball => self.process_tarball(package),
            Mode::Deb => self.process_deb(package),
        };

        result.unwrap_or_else(|e| PackageOutcome::Skipped(SkipReason::Failed(e)))
    }

    fn process_deb(&self, package: &PackageRecord) -> Result<PackageOutcome, Error> {
        let dir = self.target.join(&package.name);
        create_dir(&dir)?;

        let page_url = self.endpoints.deb_download_page(&package.name);
        let page = self.client.get_text(&page_url)?;
        let Some(link) = first_link(&page, &page_url, &self.endpoints.mirror_marker)? else {
            return Ok(PackageOutcome::Skipped(SkipReason::NoDownloadLink));
        };

        let deb = dir.join(format!("{}.deb", package.name));
        self.client.download(&link, &deb)?;
        self.extractor.extract(&deb, &dir)?;

        let objects = find_object_files(&dir)?;
        debug!(package = %package.name, objects = objects.len(), "found object files");
        Ok(PackageOutcome::Processed(ResultRecord::new(
            package,
            Flag::ObjectFiles(objects),
        )))
    }

    fn process_tarball(&self, package: &PackageRecord) -> Result<PackageOutcome, Error> {
        let page = self.client.get_text(&package.source_page_url)?;
        let Some(link) = first_link(&page, &package.source_page_url, TARBALL_MARKER)? else {
            return Ok(PackageOutcome::Skipped(SkipReason::NoDownloadLink));
        };

        let dir = self.target.join(&package.name);
        create_dir(&dir)?;

        let archive = dir.join(format!("{}.tar.gz", package.name));
        self.client.download(&link, &archive)?;

        let sources = dir.join(&package.name);
        unpack_tarball(&archive, &sources)?;

        let found = self.scanner.scan(&sources)?;
        debug!(package = %package.name, found, "scanned sources");
        Ok(PackageOutcome::Processed(ResultRecord::new(
            package,
            Flag::keyword(found),
        )))
    }
}

fn create_dir(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|e| IoError::create_dir_error(path, e))
}

/// A single normal path component, so `target/<name>` stays inside `target`.
fn is_safe_dir_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
