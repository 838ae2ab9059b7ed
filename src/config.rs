//! Server configuration loaded from the environment.
//!
//! | Variable         | Default   |
//! |------------------|-----------|
//! | `TASKBOARD_HOST` | `0.0.0.0` |
//! | `TASKBOARD_PORT` | `8080`    |
//!
//! Blank values fall back to the defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Environment variable holding the bind address.
pub const HOST_VAR: &str = "TASKBOARD_HOST";
/// Environment variable holding the bind port.
pub const PORT_VAR: &str = "TASKBOARD_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading server configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("invalid TASKBOARD_HOST '{0}', expected an IP address")]
    InvalidHost(String),

    /// The port is not a number in `0..=65535`.
    #[error("invalid TASKBOARD_PORT '{0}', expected a port number")]
    InvalidPort(String),
}

/// Listening address for the task server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_blank(lookup(HOST_VAR)) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => DEFAULT_HOST,
        };
        let port = match non_blank(lookup(PORT_VAR)) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|raw| !raw.is_empty())
}
