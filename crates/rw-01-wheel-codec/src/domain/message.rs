//! Encoded and decoded report values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::condition::ConditionType;

/// Width of one zero-padded segment
pub const SEGMENT_LEN: usize = 3;

/// Total length of an encoded message (three segments, no delimiter)
pub const MESSAGE_LEN: usize = SEGMENT_LEN * 3;

/// Format a segment value as three zero-padded digits.
pub fn zero_pad3(value: u32) -> String {
    format!("{:03}", value)
}

/// A 9-digit report code: `dayCode ∥ conditionCode ∥ caseCode`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedMessage(String);

impl EncodedMessage {
    /// Parse a code, accepting exactly 9 ASCII digits.
    pub fn parse(code: &str) -> Option<Self> {
        if code.len() != MESSAGE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(code.to_string()))
    }

    /// Build from three already-padded segments.
    pub(crate) fn from_segments(day: &str, condition: &str, cases: &str) -> Self {
        Self(format!("{day}{condition}{cases}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day-of-month segment (digits 1-3)
    pub fn day_code(&self) -> &str {
        &self.0[..SEGMENT_LEN]
    }

    /// Condition segment (digits 4-6)
    pub fn condition_code(&self) -> &str {
        &self.0[SEGMENT_LEN..2 * SEGMENT_LEN]
    }

    /// Case-count segment (digits 7-9)
    pub fn case_code(&self) -> &str {
        &self.0[2 * SEGMENT_LEN..]
    }

    /// All three segments in message order.
    pub fn segments(&self) -> [&str; 3] {
        [self.day_code(), self.condition_code(), self.case_code()]
    }
}

impl fmt::Display for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EncodedMessage> for String {
    fn from(message: EncodedMessage) -> Self {
        message.0
    }
}

impl TryFrom<String> for EncodedMessage {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("not a {MESSAGE_LEN}-digit report code: {value:?}"))
    }
}

/// Encoder output for operator display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedReport {
    /// The code to text
    pub message: EncodedMessage,
    /// Wheel start index that produced it
    pub start_index: usize,
    pub day_of_month: u32,
    pub condition: ConditionType,
    pub case_count: u32,
}

/// A successfully decoded report
///
/// Only the decoder constructs these, so fields are always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedMessage {
    pub day_of_month: u32,
    pub condition: ConditionType,
    pub case_count: u32,
}
