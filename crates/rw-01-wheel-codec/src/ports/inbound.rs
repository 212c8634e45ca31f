//! Inbound Ports (Driving Ports)
//!
//! The API that the operator CLI and the SMS gateway use to talk to the wheel.

use crate::domain::{ConditionType, DecodedMessage, EncodedReport};
use crate::error::WheelError;

/// Primary wheel API (Driving Port)
pub trait WheelCodecApi: Send + Sync {
    /// Encode a report, choosing the wheel's start index internally.
    ///
    /// # Errors
    /// Any field outside its range, or a start index past the end of the
    /// prime table, is returned as the matching [`WheelError`] variant.
    fn encode_report(
        &self,
        day_of_month: u32,
        condition: ConditionType,
        case_count: u32,
    ) -> Result<EncodedReport, WheelError>;

    /// Decode a received code. `None` means "not a valid report".
    fn decode(&self, message: &str) -> Option<DecodedMessage>;
}
