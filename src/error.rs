// src/error.rs
//! Error kinds for each stage of a run.
//!
//! Only [`CliError`] and [`ExportError`] ever reach the binary. Fetch and date
//! errors are inspected by the scrape layer, logged, and degraded to "no data".

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateError {
    /// Not two tokens around a single " - ".
    #[error("malformed date range '{0}'")]
    Shape(String),

    #[error("error while processing date '{token}': {source}")]
    Token {
        token: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to encode flyers as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that can stop a CLI run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error("could not set up HTTP client: {0}")]
    Client(#[from] FetchError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown arg: {0}")]
    UnknownArg(String),
}
