//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::AppConfig`].
    #[error("Failed to parse config file {path}: {message}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A credential required by the selected provider is missing.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
