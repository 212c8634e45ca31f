//! SMS gateway service - main entry point.
//!
//! Owns the configuration and shared state, binds the HTTP listener and
//! serves until the shutdown future resolves.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::middleware::GatewayMetrics;
use crate::router::{build_router, AppState};
use axum::Router;
use rw_01_wheel_codec::WheelCodecApi;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// SMS gateway service state
pub struct SmsGatewayService {
    config: GatewayConfig,
    state: AppState,
}

impl SmsGatewayService {
    /// Create a new gateway around a wheel codec
    pub fn new(config: GatewayConfig, wheel: Arc<dyn WheelCodecApi>) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            state: AppState::new(wheel),
        })
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.state.metrics)
    }

    /// Build the HTTP router with the configured middleware
    pub fn router(&self) -> Router {
        build_router(
            self.state.clone(),
            self.config.timeouts.request(),
            self.config.limits.max_body_bytes,
        )
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr().map_err(GatewayError::Server)?;
        info!(addr = %local_addr, "Starting SMS gateway");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Server)?;

        info!("SMS gateway stopped");
        Ok(())
    }
}
