//! RW-02 SMS Gateway - webhook receiver for reporting wheel codes.
//!
//! The SMS provider posts each inbound text as a form; the gateway decodes
//! the `Body` with the wheel codec and answers with a TwiML message.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 SMS GATEWAY (rw-02)                  │
//! ├──────────────────────────────────────────────────────┤
//! │   GET /        POST /sms        GET /metrics         │
//! │      │             │                 │               │
//! │  ┌───┴─────────────┴─────────────────┴───┐           │
//! │  │  Tracing → Timeout → BodyLimit        │           │
//! │  └──────────────────┬────────────────────┘           │
//! │                     │                                │
//! │        SmsOutcome::classify + TwiML reply            │
//! └─────────────────────┼────────────────────────────────┘
//!                       │ WheelCodecApi::decode
//!                       ▼
//!                rw-01-wheel-codec
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use rw_02_sms_gateway::{GatewayConfig, SmsGatewayService};
//! use rw_01_wheel_codec::WheelService;
//!
//! let service = SmsGatewayService::new(GatewayConfig::from_env()?, Arc::new(WheelService::random()))?;
//! service.start(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::{
    ConfigError, GatewayConfig, GatewayError, InboundSms, MessagingResponse, SmsOutcome,
};
pub use middleware::{GatewayMetrics, MetricsSnapshot};
pub use router::{build_router, AppState};
pub use service::SmsGatewayService;
