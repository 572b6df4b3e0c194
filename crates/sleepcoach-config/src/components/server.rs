//! HTTP server configuration

use super::defaults;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};

/// HTTP server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Bind host
    pub host: Option<String>,
    /// Bind port
    pub port: Option<u16>,
    /// Serve the browser form from this directory instead of the built-in copy
    pub web_dir: Option<String>,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: Option<usize>,
}

impl ServerConfig {
    /// Get the bind host, using default if not specified
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(defaults::DEFAULT_HOST)
    }

    /// Get the bind port, using default if not specified
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(defaults::DEFAULT_PORT)
    }

    /// Get the body size limit, using default if not specified
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
            .unwrap_or(defaults::DEFAULT_MAX_BODY_BYTES)
    }

    /// Resolve host and port into a socket address.
    ///
    /// Host names such as `localhost` go through the system resolver and
    /// the first address returned is used.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let (host, port) = (self.host(), self.port());
        (host, port)
            .to_socket_addrs()
            .map_err(|e| ConfigError::Invalid(format!("Invalid address {host}:{port}: {e}")))?
            .next()
            .ok_or_else(|| ConfigError::Invalid(format!("No address found for {host}:{port}")))
    }
}
