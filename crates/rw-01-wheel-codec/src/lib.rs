//! # RW-01 Wheel Codec
//!
//! Encodes a field report (day of month, condition, case count) into a
//! 9-digit code that fits in one text message, and decodes and validates
//! received codes without any checksum or shared key.
//!
//! ## Scheme
//!
//! ```text
//!  start index s (the "wheel")
//!        │
//!        ▼
//!  PRIME_TABLE = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31]
//!                 P[s]      P[s+1]        P[s+2]
//!                   │          │             │
//!   day * P[s]  ────┘  rank * P[s+1]  cases * P[s+2]
//!        │                     │             │
//!      "ddd"         ∥       "ccc"     ∥   "nnn"     → 9 digits
//! ```
//!
//! The decoder finds the start index whose three consecutive primes explain
//! all three segments. A mistyped digit almost always breaks that agreement,
//! so the code validates itself.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O, no randomness
//!   - `encode` / `decode`: the codec
//!   - `ConditionType`: condition registry
//!   - `LookupTables`: decoder tables, built once per process
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `WheelCodecApi`: Driving port (CLI and gateway)
//!   - `StartIndexSource`: Driven port (wheel start selection)
//!
//! - **Adapters Layer** (`adapters/`): `RandomStartIndex`, `FixedStartIndex`
//!
//! - **Service Layer** (`service/`): `WheelService` implements `WheelCodecApi`
//!
//! ## Invariants
//!
//! - Codes are exactly 9 ASCII digits; every segment is zero-padded to 3.
//! - Decoding never fails loudly: every kind of bad input yields `None`.
//! - Ambiguous day codes resolve to the lowest consistent start index.
//!
//! ## Usage Example
//!
//! ```
//! use rw_01_wheel_codec::{ConditionType, FixedStartIndex, WheelCodecApi, WheelService};
//! use std::sync::Arc;
//!
//! let wheel = WheelService::new(Arc::new(FixedStartIndex(3)));
//! let report = wheel.encode_report(5, ConditionType::Malaria, 4).unwrap();
//! assert_eq!(report.message.as_str(), "035033052");
//!
//! let decoded = wheel.decode("035033052").unwrap();
//! assert_eq!(decoded.day_of_month, 5);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{FixedStartIndex, RandomStartIndex};
pub use domain::{
    decode, encode, validate_case_count, validate_day, zero_pad3, ConditionType,
    DecodedMessage, EncodedMessage, EncodedReport, LookupTables, WheelSeeds, CASE_COUNT_RANGE,
    DAY_RANGE, MAX_START_INDEX, PRIME_TABLE,
};
pub use error::WheelError;
pub use ports::{StartIndexSource, WheelCodecApi};
pub use service::WheelService;
