//! Validation errors surfaced to the caller as client errors.

use thiserror::Error;

/// The request cannot be turned into a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An urge request carried none of the time-bearing fields
    #[error("Invalid request body: provide localHour or iso or localTime")]
    MissingTime,

    /// The body is not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}
