//! # Reporting Wheel SMS Gateway
//!
//! Receives SMS webhooks, decodes wheel codes and replies with TwiML.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging from `RW_*` environment variables
//! 2. Load and validate gateway configuration
//! 3. Serve until Ctrl-C

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use rw_01_wheel_codec::WheelService;
use rw_02_sms_gateway::{GatewayConfig, SmsGatewayService};
use rw_telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env().with_service_name("rw-sms-gateway"))
        .context("failed to initialize logging")?;

    let config = GatewayConfig::from_env().context("invalid gateway configuration")?;
    let service = SmsGatewayService::new(config, Arc::new(WheelService::random()))?;

    info!("Press Ctrl-C to stop");
    service
        .start(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for Ctrl-C");
            }
            info!("Received shutdown signal");
        })
        .await?;

    Ok(())
}
