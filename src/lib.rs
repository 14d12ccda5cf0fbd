/// debscan
///
/// Samples packages from the Debian sources API by dominant language, downloads
/// their source tarballs (or `.deb` archives), and scans the extracted files for
/// keywords (or object files).
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod languages;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod scanner;

pub use config::{Endpoints, Mode, RunConfig};
pub use error::{Error, Result};
pub use languages::{LanguageMap, LanguageSelection, LanguageSpec};
pub use metadata::PackageRecord;
pub use output::{Flag, ResultRecord};
