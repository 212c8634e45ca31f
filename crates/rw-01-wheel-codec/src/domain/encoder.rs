//! Report encoder
//!
//! Deterministic given its inputs: the caller picks the start index.

use super::condition::ConditionType;
use super::message::{zero_pad3, EncodedMessage};
use super::primes::WheelSeeds;
use super::validation::{validate_case_count, validate_day};
use crate::error::WheelError;

/// Encode a report into its 9-digit code.
///
/// `day` must be in `1..=31`, `case_count` in `1..=20` and `start_index` in
/// `0..=MAX_START_INDEX`. Out-of-range input is rejected, never clamped.
///
/// ```
/// use rw_01_wheel_codec::{encode, ConditionType};
///
/// let code = encode(1, ConditionType::Cholera, 1, 0).unwrap();
/// assert_eq!(code.as_str(), "002003005");
/// ```
pub fn encode(
    day: u32,
    condition: ConditionType,
    case_count: u32,
    start_index: usize,
) -> Result<EncodedMessage, WheelError> {
    let day = validate_day(day)?;
    let case_count = validate_case_count(case_count)?;
    let seeds = WheelSeeds::at(start_index)?;

    // 31 * 31 = 961, 7 * 31 = 217, 20 * 31 = 620: every product fits 3 digits
    let day_code = zero_pad3(day * seeds.day);
    let condition_code = zero_pad3(condition.rank() * seeds.condition);
    let case_code = zero_pad3(case_count * seeds.cases);

    Ok(EncodedMessage::from_segments(
        &day_code,
        &condition_code,
        &case_code,
    ))
}
