//! API client error types.

use thiserror::Error;

/// Errors that can occur when calling the Kisaan API.
///
/// Page views collapse every variant into one "fetch failed" outcome; the
/// distinction exists for logs and for direct CLI lookups.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, usually a `{"detail": ...}` JSON object.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server answered 404 for the requested resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
