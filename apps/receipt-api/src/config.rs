//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind (default: 127.0.0.1)
    pub host: String,

    /// HTTP port (default: 8080)
    pub port: u16,

    /// Log at debug level when `RUST_LOG` is unset
    pub debug: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `RECEIPT_API_HOST` - bind address (default: 127.0.0.1)
    /// - `RECEIPT_API_PORT` - port (default: 8080)
    /// - `RECEIPT_API_DEBUG` - `true`/`false` (default: false)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let host = lookup("RECEIPT_API_HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()));
        }

        let port = match lookup("RECEIPT_API_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
            None => defaults.port,
        };

        let debug = match lookup("RECEIPT_API_DEBUG") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("RECEIPT_API_DEBUG".to_string()))?,
            None => defaults.debug,
        };

        Ok(ApiConfig { host, port, debug })
    }

    /// Address to bind, e.g. `127.0.0.1:8080`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
