use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_ARCH, DEFAULT_CACHE_FILE, DEFAULT_MIRROR_MARKER, DEFAULT_PACKAGES_SITE,
    DEFAULT_SOURCES_API, DEFAULT_SUITE,
};

#[derive(Parser, Debug)]
#[command(name = "debscan")]
#[command(
    about = "Debian source sampler - fetch packages by dominant language and scan them for keywords",
    long_about = None
)]
pub struct Args {
    /// Languages to filter for, matched against each package's dominant language
    #[arg(
        short,
        long,
        num_args = 1..,
        value_name = "LANG",
        required_unless_present = "list_languages"
    )]
    pub languages: Vec<String>,

    /// Randomly sample about this many packages from the filtered list (0 = full list)
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    pub sample_size: usize,

    /// Cache file for package metadata (bare flag uses cache.json)
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = DEFAULT_CACHE_FILE,
        value_name = "FILE"
    )]
    pub cache: Option<PathBuf>,

    /// Target directory to download to (defaults to a fresh UUID)
    #[arg(short, long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Keywords to search for in source files (none = every package matches)
    #[arg(short, long, num_args = 1.., value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Download .deb archives instead of .orig.tar.gz sources
    #[arg(short, long)]
    pub debs: bool,

    /// YAML file adding or overriding language map entries
    #[arg(long, value_name = "FILE")]
    pub language_map: Option<PathBuf>,

    /// Base URL of the sources metadata API
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCES_API)]
    pub sources_api: String,

    /// Base URL of the package index site
    #[arg(long, value_name = "URL", default_value = DEFAULT_PACKAGES_SITE)]
    pub packages_site: String,

    /// Suite used in package index URLs
    #[arg(long, value_name = "SUITE", default_value = DEFAULT_SUITE)]
    pub suite: String,

    /// Architecture of .deb download pages
    #[arg(long, value_name = "ARCH", default_value = DEFAULT_ARCH)]
    pub arch: String,

    /// Substring identifying mirror links on .deb download pages
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MIRROR_MARKER)]
    pub mirror_marker: String,

    /// Per-request timeout in seconds (no timeout if not specified)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the known languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref map_path) = self.language_map {
            if !map_path.exists() {
                anyhow::bail!("Language map does not exist: {}", map_path.display());
            }
        }
        validate_url(&self.sources_api)?;
        validate_url(&self.packages_site)?;
        if let Some(ref target) = self.target {
            if target.exists() && !target.is_dir() {
                anyhow::bail!("Target is not a directory: {}", target.display());
            }
        }
        if let Some(ref cache) = self.cache {
            if cache.is_dir() {
                anyhow::bail!("Cache path is a directory: {}", cache.display());
            }
        }
        if self.mirror_marker.is_empty() {
            anyhow::bail!("Mirror marker must not be empty");
        }
        Ok(())
    }
}

pub fn validate_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid URL {url}: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("Unsupported URL scheme in {url}");
    }
    Ok(())
}
