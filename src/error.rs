//! Error types for devops-graph.

use thiserror::Error;

/// Errors raised while talking to the upstream REST API.
#[derive(Debug, Error)]
pub enum DevOpsError {
    /// The personal access token was empty.
    #[error("access token is empty")]
    MissingToken,

    /// The token produced a header value the HTTP stack rejects.
    #[error("access token is not usable as a header value: {0}")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),

    /// The organization URL (or a path joined onto it) is not a valid URL.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An id cannot be used as a single path segment.
    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    /// The organization URL cannot have path segments appended.
    #[error("organization URL cannot be a base: {0}")]
    NotABaseUrl(String),

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A collection endpoint answered without a `value` array.
    #[error("response from {path} has no `value` array")]
    MissingCollection { path: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DevOpsError>;
