//! Domain layer for the SMS gateway.

pub mod config;
pub mod error;
pub mod twiml;
pub mod webhook;

pub use config::{GatewayConfig, HttpConfig, LimitsConfig, TimeoutConfig};
pub use error::{ConfigError, GatewayError};
pub use twiml::{escape_xml, MessagingResponse, TWIML_CONTENT_TYPE};
pub use webhook::{InboundSms, SmsOutcome, ERROR_REPLY, INVALID_REPLY};
