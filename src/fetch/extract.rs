use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::ExtractError;

/// Unpacks a gzip-compressed tarball into `dest`, creating it if needed.
pub fn unpack_tarball(archive: &Path, dest: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive).map_err(|source| ExtractError::Open {
        path: archive.to_path_buf(),
        source,
    })?;

    let unpack_err = |source| ExtractError::Unpack {
        path: archive.to_path_buf(),
        dest: dest.to_path_buf(),
        source,
    };

    fs::create_dir_all(dest).map_err(unpack_err)?;
    let mut tarball = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
    tarball.unpack(dest).map_err(unpack_err)?;

    debug!(archive = %archive.display(), dest = %dest.display(), "unpacked tarball");
    Ok(())
}

/// Extracts `.deb` archives into a directory.
pub trait DebExtractor: Send + Sync {
    fn extract(&self, deb: &Path, dest: &Path) -> Result<(), ExtractError>;
}

/// Shells out to `dpkg-deb -x`, discarding its output.
#[derive(Debug, Clone)]
pub struct DpkgDeb {
    program: PathBuf,
}

impl DpkgDeb {
    pub const PROGRAM: &'static str = "dpkg-deb";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn tool(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for DpkgDeb {
    fn default() -> Self {
        Self::new(Self::PROGRAM)
    }
}

impl DebExtractor for DpkgDeb {
    fn extract(&self, deb: &Path, dest: &Path) -> Result<(), ExtractError> {
        let status = Command::new(&self.program)
            .arg("-x")
            .arg(deb)
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ExtractError::Spawn {
                tool: self.tool(),
                source,
            })?;

        if !status.success() {
            return Err(ExtractError::ToolFailed {
                tool: self.tool(),
                path: deb.to_path_buf(),
                status,
            });
        }

        debug!(deb = %deb.display(), dest = %dest.display(), "extracted deb");
        Ok(())
    }
}
