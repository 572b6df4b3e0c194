//! Config file discovery, parsing, and environment overrides

use crate::{AppConfig, ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "SLEEPCOACH_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "SLEEPCOACH_PORT";
/// Environment variable overriding `inference.account_id`
pub const ENV_ACCOUNT_ID: &str = "CLOUDFLARE_ACCOUNT_ID";
/// Environment variable overriding `inference.api_token`
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";

/// Default config location: `~/.config/sleepcoach/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sleepcoach").join("config.toml"))
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise. Environment
    /// overrides are applied last, then the result is validated.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = Some(host);
        }

        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.server.port = Some(port),
                Err(_) => warn!("Ignoring {ENV_PORT}={port}: not a valid port"),
            }
        }

        if let Some(account_id) = lookup(ENV_ACCOUNT_ID) {
            self.inference.account_id = Some(account_id);
        }

        if let Some(token) = lookup(ENV_API_TOKEN) {
            self.inference.api_token = Some(token);
        }
    }
}
