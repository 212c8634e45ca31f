//! Ports Layer - Trait definitions
//!
//! - Inbound ports (driving): API exposed to the CLI and the gateway
//! - Outbound ports (driven): start index selection

pub mod inbound;
pub mod outbound;

pub use inbound::WheelCodecApi;
pub use outbound::StartIndexSource;
