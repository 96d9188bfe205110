// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// Why a selected row could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unrecognized row layout: {cells} cells (expected 4 or 5)")]
    UnrecognizedLayout { cells: usize },

    #[error("name cell has {found} links, expected at least 3")]
    MissingLinks { found: usize },

    #[error("detail link has no href")]
    MissingHref,

    #[error("peers cell has {found} spans, expected at least 2")]
    MissingCounts { found: usize },

    #[error("field `{field}` is empty")]
    EmptyField { field: &'static str },
}

/// An [`ExtractError`] tagged with the position of the row in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {index}: {source}")]
pub struct RowError {
    pub index: usize,
    #[source]
    pub source: ExtractError,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("extraction aborted at {0}")]
    Extract(#[from] RowError),
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("cannot resolve link {uri:?}: {reason}")]
    Resolve { uri: String, reason: String },

    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),
}
