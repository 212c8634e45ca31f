//! Inbound SMS webhook form and the reply texts sent back.

use rw_01_wheel_codec::DecodedMessage;
use serde::Deserialize;

/// Reply for a code that decodes under no start index.
pub const INVALID_REPLY: &str = "Oops! Your message does not appear to be valid.";

/// Reply when the webhook request itself cannot be handled.
pub const ERROR_REPLY: &str = "An error was encountered";

/// Form fields posted by the SMS provider.
///
/// Only `Body` matters for decoding; the rest are kept for log correlation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct InboundSms {
    #[serde(rename = "Body")]
    pub body: Option<String>,
    #[serde(rename = "MessageSid")]
    pub message_sid: Option<String>,
}

/// Outcome of processing one inbound SMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsOutcome {
    /// The body decoded to a report.
    Decoded(DecodedMessage),
    /// The body was present but is not a valid code.
    Rejected,
    /// The request had no usable body.
    Malformed,
}

impl SmsOutcome {
    /// Classify an optional message body.
    ///
    /// The body is decoded verbatim: surrounding whitespace makes it invalid.
    pub fn classify<F>(body: Option<&str>, decode: F) -> Self
    where
        F: FnOnce(&str) -> Option<DecodedMessage>,
    {
        match body {
            None => SmsOutcome::Malformed,
            Some(text) => decode(text).map_or(SmsOutcome::Rejected, SmsOutcome::Decoded),
        }
    }

    /// Text placed in the TwiML `<Body>`.
    pub fn reply_text(&self) -> String {
        match self {
            SmsOutcome::Decoded(report) => format!(
                "Decoded Message:\n\
                 dayOfMonth={}\n\
                 disease={}\n\
                 numberOfCases={}\n\
                 \n\
                 Thank you for your report!",
                report.day_of_month,
                report.condition.name(),
                report.case_count
            ),
            SmsOutcome::Rejected => INVALID_REPLY.to_string(),
            SmsOutcome::Malformed => ERROR_REPLY.to_string(),
        }
    }
}
