// File: crates/heatmap-loader/src/error.rs
// Summary: Load failures and their classification into fetch / parse / empty.

use std::path::PathBuf;

use heatmap_core::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("cannot read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// What the user is told went wrong. Every kind is fatal to the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network/transport failure, non-success status, or unreadable file.
    FetchFailed,
    /// Body is not JSON or does not match the expected document shape.
    ParseFailed,
    /// Document parsed but holds no records.
    EmptyDataset,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::FetchFailed { .. }
            | LoadError::Client(_)
            | LoadError::HttpStatus { .. }
            | LoadError::ReadFailed { .. } => {
                ErrorKind::FetchFailed
            }
            LoadError::Dataset(DatasetError::EmptyDataset) => ErrorKind::EmptyDataset,
            LoadError::Dataset(DatasetError::Parse(_) | DatasetError::MonthOutOfRange { .. }) => {
                ErrorKind::ParseFailed
            }
        }
    }
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::FetchFailed => "fetch failed",
            ErrorKind::ParseFailed => "parse failed",
            ErrorKind::EmptyDataset => "empty dataset",
        }
    }
}
