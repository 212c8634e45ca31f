//! # RW Telemetry
//!
//! Logging setup shared by the reporting wheel binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rw_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TelemetryConfig::from_env().with_service_name("rw-sms-gateway");
//!     let _guard = init_telemetry(config)?;
//!
//!     // Your application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RW_SERVICE_NAME` | `reporting-wheel` | Service name in logs |
//! | `RW_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honoured) |
//! | `RW_JSON_LOGS` | `false` (`true` in containers) | JSON formatted output |
//! | `RW_CONSOLE_OUTPUT` | `true` | Write logs at all |

mod config;
mod logging;

pub use config::{LogTarget, TelemetryConfig};
pub use logging::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    logging::init_logging(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active. Logs a final line on drop.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}

/// Convenience macro for creating a span with component context.
///
/// # Example
///
/// ```rust,ignore
/// use rw_telemetry::component_span;
///
/// let _span = component_span!("decode_sms", component = "gateway").entered();
/// ```
#[macro_export]
macro_rules! component_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
