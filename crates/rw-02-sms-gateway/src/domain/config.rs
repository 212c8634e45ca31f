//! Gateway configuration with validation.
//!
//! Defaults, then environment overrides, then [`GatewayConfig::validate`].

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{info, warn};

use super::error::ConfigError;

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Request size limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Load defaults and apply environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `RW_HTTP_HOST`: bind address (default: 0.0.0.0)
    /// - `RW_HTTP_PORT`: port (default: 4567)
    /// - `RW_REQUEST_TIMEOUT_MS`: per-request timeout (default: 5000)
    /// - `RW_MAX_BODY_BYTES`: webhook body limit (default: 16384)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("RW_HTTP_HOST") {
            config.http.host = parse_var("RW_HTTP_HOST", &host)?;
        }
        if let Some(port) = lookup("RW_HTTP_PORT") {
            config.http.port = parse_var("RW_HTTP_PORT", &port)?;
        }
        if let Some(timeout) = lookup("RW_REQUEST_TIMEOUT_MS") {
            config.timeouts.request_ms = parse_var("RW_REQUEST_TIMEOUT_MS", &timeout)?;
        }
        if let Some(limit) = lookup("RW_MAX_BODY_BYTES") {
            config.limits.max_body_bytes = parse_var("RW_MAX_BODY_BYTES", &limit)?;
        }

        config.validate()?;
        info!(addr = %config.http_addr(), "Loaded gateway configuration");
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.timeouts.request_ms == 0 {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| {
        warn!(var, value, "Ignoring unparseable environment override");
        ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }
    })
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 4567)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 4567,
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in milliseconds
    pub request_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_ms: 5_000 }
    }
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }
}

/// Request size limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum webhook body size in bytes
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
        }
    }
}
