//! Middleware stack for the SMS gateway.
//!
//! Layer order: Request → Tracing → Timeout → BodyLimit → Handler

pub mod metrics;
pub mod timeout;
pub mod tracing;

pub use metrics::{GatewayMetrics, MetricsSnapshot};
pub use timeout::TimeoutLayer;
pub use self::tracing::TracingLayer;
