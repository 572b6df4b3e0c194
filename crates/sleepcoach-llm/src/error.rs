//! Upstream failures. All of them surface as server errors.

use sleepcoach_config::ConfigError;
use thiserror::Error;

/// The inference call failed or answered with something unusable
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Network-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer
    #[error("Upstream returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// Body is not JSON
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// Workers AI envelope with `success: false`
    #[error("Upstream rejected the request: {0}")]
    Rejected(String),

    /// Provider could not be built from configuration
    #[error("Provider configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for UpstreamError {
    fn from(err: ConfigError) -> Self {
        UpstreamError::Config(err.to_string())
    }
}

/// Result alias for upstream calls
pub type UpstreamResult<T> = Result<T, UpstreamError>;
