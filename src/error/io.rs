use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk directory '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDirError {
            path: path.into(),
            source,
        }
    }

    pub fn walk_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::WalkError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = IoError::file_not_found("/path/to/langs.yaml");
        assert_eq!(err.to_string(), "file not found: /path/to/langs.yaml");
    }

    #[test]
    fn test_create_dir_error_display() {
        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IoError::create_dir_error("/srv/out/zlib", source);
        assert!(err
            .to_string()
            .starts_with("failed to create directory '/srv/out/zlib'"));
    }
}
