//! Test client failures.

use thiserror::Error;

/// Things that can go wrong while driving the app from a test.
#[derive(Debug, Error)]
pub enum TestError {
    /// The request could not be assembled from its parts.
    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),

    /// The response body was read as text but is not UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    NonUtf8Body(#[from] std::string::FromUtf8Error),

    /// The response body was read as JSON but does not parse.
    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
