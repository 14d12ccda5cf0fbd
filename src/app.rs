use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::cache;
use crate::config::RunConfig;
use crate::error::{IoError, Result};
use crate::fetch::{DebExtractor, DpkgDeb};
use crate::http::{HttpClient, ReqwestClient};
use crate::languages::LanguageMap;
use crate::metadata::MetadataFetcher;
use crate::output;
use crate::pipeline::{Pipeline, RunReport};
use crate::scanner::KeywordScanner;

#[derive(Debug)]
pub struct RunSummary {
    pub report: RunReport,
    pub results_path: PathBuf,
}

/// Runs discovery, the fetch pipeline and the result writer with the real
/// HTTP client and `dpkg-deb`.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let languages = LanguageMap::load(config.language_map.as_deref())?;
    // Fail on unknown languages before the client is even built.
    languages.select(config.languages.as_slice())?;

    let client = ReqwestClient::new(config.timeout)?;
    run_with(
        config,
        &languages,
        &client,
        &DpkgDeb::default(),
        &mut rand::thread_rng(),
    )
}

pub fn run_with<C, X, R>(
    config: &RunConfig,
    languages: &LanguageMap,
    client: &C,
    extractor: &X,
    rng: &mut R,
) -> Result<RunSummary>
where
    C: HttpClient,
    X: DebExtractor,
    R: Rng + ?Sized,
{
    let selection = languages.select(config.languages.as_slice())?;

    let packages = cache::load_or_fetch(config.cache.as_deref(), || {
        MetadataFetcher::new(client, &config.endpoints, languages)
            .fetch_selected(&selection)
            .map(|report| report.packages)
    })?;

    if !config.target.is_dir() {
        fs::create_dir_all(&config.target)
            .map_err(|e| IoError::create_dir_error(&config.target, e))?;
    }

    let scanner = KeywordScanner::new(selection.extensions(), config.keyword_bytes());
    let report = Pipeline::new(client, extractor, &config.endpoints, scanner, &config.target)
        .with_mode(config.mode)
        .with_sample_size(config.sample_size)
        .run(packages, rng);

    let results_path = output::write_results(&config.target, &report.results)?;
    info!(
        results = report.results.len(),
        skipped = report.skipped.len(),
        stopped_early = report.stopped_early,
        "run complete"
    );

    Ok(RunSummary {
        report,
        results_path,
    })
}
