use crate::error::Error;
use crate::output::ResultRecord;

/// Why a package produced no result.
#[derive(Debug)]
pub enum SkipReason {
    /// The index page had no link with the expected marker.
    NoDownloadLink,
    /// The package name cannot be used as a directory name.
    InvalidName,
    Failed(Error),
}

impl SkipReason {
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::NoDownloadLink)
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDownloadLink => write!(f, "no download link"),
            Self::InvalidName => write!(f, "invalid package name"),
            Self::Failed(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug)]
pub enum PackageOutcome {
    Processed(ResultRecord),
    Skipped(SkipReason),
}

#[derive(Debug)]
pub struct PackageSkip {
    pub package: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<ResultRecord>,
    pub skipped: Vec<PackageSkip>,
    /// Set when the sample size was exceeded before the input ran out.
    pub stopped_early: bool,
}
