//! Domain Layer - Pure wheel logic
//!
//! This layer contains:
//! - The prime table and wheel seed selection
//! - The condition registry
//! - Field range validation
//! - Encoder
//! - Decoder and its lookup tables
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No randomness (the start index is always an input)

pub mod condition;
pub mod decoder;
pub mod encoder;
pub mod lookup;
pub mod message;
pub mod primes;
pub mod validation;

pub use condition::ConditionType;
pub use decoder::{decode, decode_with};
pub use encoder::encode;
pub use lookup::{LookupTables, LOOKUP_TABLES};
pub use message::{zero_pad3, DecodedMessage, EncodedMessage, EncodedReport, MESSAGE_LEN, SEGMENT_LEN};
pub use primes::{prime_at, WheelSeeds, MAX_START_INDEX, PRIME_TABLE, SEEDS_PER_REPORT};
pub use validation::{validate_case_count, validate_day, CASE_COUNT_RANGE, DAY_RANGE};
