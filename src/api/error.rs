//! Error types for the API layer
//!
//! The HTTP wrapper classifies failure responses into distinguishable
//! kinds so the resolver can branch on them; everything else propagates
//! as-is.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("bad request: {url}: {message}")]
    BadRequest { url: String, message: String },

    #[error("API request failed: {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0} record has no id field")]
    MissingId(String),

    #[error("malformed {0} record: {1}")]
    Malformed(String, String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome of resolving a user-supplied name or ID to a single resource.
///
/// `NotFound` and `Ambiguous` carry the literal identifier the caller
/// searched for; any other API failure passes through unchanged.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{value} matched {count} resources, expected exactly one")]
    Ambiguous { value: String, count: usize },

    #[error(transparent)]
    Api(#[from] ApiError),
}
