use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to open archive '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to unpack '{path}' into '{dest}': {source}")]
    Unpack {
        path: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status} while extracting '{path}'")]
    ToolFailed {
        tool: String,
        path: PathBuf,
        status: ExitStatus,
    },
}
