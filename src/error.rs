//! Error types for rusty-fetch
//!
//! Two layers:
//! - [`Error`] covers run setup (base URL, HTTP client). It is the only error
//!   that stops a run before any fetch is made.
//! - [`FetchError`] covers a single id. It is folded into the summary as a
//!   failure and never aborts a run.

use thiserror::Error;

/// Result type alias for rusty-fetch setup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Setup error
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL could not be parsed or cannot carry a path
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL parsed but cannot be used as an HTTP endpoint root
    #[error("base url cannot be a base for resource paths: {0}")]
    CannotBeABase(String),

    /// The HTTP client could not be built
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure to fetch one resource
#[derive(Debug, Error)]
#[error("fetch {id} failed: {cause}")]
pub struct FetchError {
    /// Id of the resource that failed
    pub id: u32,
    /// Underlying cause
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(id: u32, cause: impl Into<FetchCause>) -> Self {
        Self { id, cause: cause.into() }
    }
}

/// What went wrong while fetching one resource
///
/// The reporting layer does not distinguish between variants, every cause
/// counts as one failure.
#[derive(Debug, Error)]
pub enum FetchCause {
    /// Connection, TLS, timeout or body read failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Body was read but is not a valid record
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The task running the fetch panicked or was aborted
    #[error("task failed: {0}")]
    TaskFailed(String),

    /// Failure reported by a non-HTTP fetcher
    #[error("{0}")]
    Other(String),
}
