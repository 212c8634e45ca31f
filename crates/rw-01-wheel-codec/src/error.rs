//! Error types for the wheel codec
//!
//! Only the encoding side reports errors. Decoding collapses every failure
//! into a single "not valid" outcome (see [`crate::domain::decode`]).

use thiserror::Error;

/// Precondition violations raised while encoding a report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("Day of month out of range: {day} (must be between {min} and {max})")]
    DayOutOfRange { day: u32, min: u32, max: u32 },

    #[error("Case count out of range: {count} (must be between {min} and {max})")]
    CaseCountOutOfRange { count: u32, min: u32, max: u32 },

    #[error("Start index out of range: {index} > {max}")]
    StartIndexOutOfRange { index: usize, max: usize },

    #[error("Unknown condition code: {0:?}")]
    UnknownCondition(String),
}
