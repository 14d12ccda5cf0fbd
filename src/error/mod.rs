mod extract;
mod fetch;
mod io;
mod language;

pub use extract::ExtractError;
pub use fetch::FetchError;
pub use io::IoError;
pub use language::LanguageError;

use thiserror::Error;

use crate::cache::CacheError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
