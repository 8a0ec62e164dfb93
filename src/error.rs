use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a raw card was skipped. Never fatal to a run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardError {
    #[error("no bloc number in {0:?}")]
    MissingNumber(String),
    #[error("bloc number out of range in {0:?}")]
    InvalidNumber(String),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
