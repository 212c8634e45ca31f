//! Subscriber setup.
//!
//! JSON output carries consistent fields for log shippers:
//! - `timestamp`, `level`, `target`
//! - `fields.message` plus any structured fields from the call site
//! - span fields (e.g. `http.method`) from the gateway's request spans

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogTarget, TelemetryConfig};
use crate::TelemetryError;

/// Build the level filter from the configured directives.
///
/// `RUST_LOG` is only consulted by [`TelemetryConfig::from_env`], after
/// `RW_LOG_LEVEL`.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let fmt_layer = if !config.console_output {
        None
    } else if config.json_logs {
        // JSON output for containers/production
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        Some(match config.target {
            LogTarget::Stdout => layer.boxed(),
            LogTarget::Stderr => layer.with_writer(std::io::stderr).boxed(),
        })
    } else {
        // Pretty output for development
        let layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false);
        Some(match config.target {
            LogTarget::Stdout => layer.with_ansi(true).boxed(),
            LogTarget::Stderr => layer.with_writer(std::io::stderr).boxed(),
        })
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::LoggerInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Structured logging initialized"
    );

    Ok(())
}
