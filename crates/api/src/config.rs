//! Environment-driven service configuration.

use std::env;
use std::net::Ipv4Addr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Listen address of one service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub const ITEMS_PREFIX: &'static str = "ITEMS_API";
    pub const ITEMS_DEFAULT_PORT: u16 = 8081;
    pub const LOCATIONS_PREFIX: &'static str = "LOCATIONS_API";
    pub const LOCATIONS_DEFAULT_PORT: u16 = 8082;

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Reads `{prefix}_HOST` (default `0.0.0.0`) and `{prefix}_PORT`.
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self, ConfigError> {
        let host_key = format!("{prefix}_HOST");
        let port_key = format!("{prefix}_PORT");

        let host = env_or_default(&host_key, &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default(&port_key, &default_port.to_string())
            .parse()
            .map_err(|e| ConfigError::Parse {
                key: port_key,
                details: format!("{e}"),
            })?;

        Ok(Self { host, port })
    }

    pub fn items_from_env() -> Result<Self, ConfigError> {
        Self::from_env(Self::ITEMS_PREFIX, Self::ITEMS_DEFAULT_PORT)
    }

    pub fn locations_from_env() -> Result<Self, ConfigError> {
        Self::from_env(Self::LOCATIONS_PREFIX, Self::LOCATIONS_DEFAULT_PORT)
    }

    /// "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
