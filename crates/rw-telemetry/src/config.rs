//! Telemetry configuration from environment variables.

use std::env;

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// Keeps stdout free for interactive prompts
    Stderr,
}

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error or a full directive)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Output stream
    pub target: LogTarget,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "reporting-wheel".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            target: LogTarget::Stdout,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RW_SERVICE_NAME`: Service name (default: reporting-wheel)
    /// - `RW_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `RW_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `RW_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("RW_SERVICE_NAME")
                .unwrap_or_else(|_| "reporting-wheel".to_string()),

            log_level: env::var("RW_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("RW_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("RW_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            target: LogTarget::Stdout,
        }
    }

    /// Configuration for an interactive tool: quiet, and on stderr.
    pub fn for_cli(service_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = service_name.to_string();
        config.target = LogTarget::Stderr;
        if env::var("RW_LOG_LEVEL").is_err() && env::var("RUST_LOG").is_err() {
            config.log_level = "warn".to_string();
        }
        config
    }

    /// Override the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
