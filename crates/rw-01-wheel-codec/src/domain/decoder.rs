//! Report decoder
//!
//! The decoder never reports *why* a code was rejected. Wrong length,
//! non-digit input and codes whose segments do not agree on a single prime
//! index all produce `None`.
//!
//! ## Ambiguity
//!
//! A day code can come from more than one `(day, start index)` pair, e.g.
//! `006` is `3 * 2` and `2 * 3`. Candidates are tried in ascending start-index
//! order and the first one whose condition and case segments are also valid
//! wins.

use super::condition::ConditionType;
use super::lookup::{LookupTables, LOOKUP_TABLES};
use super::message::{DecodedMessage, EncodedMessage};
use super::primes::prime_at;

/// Decode a received code using the process-wide lookup tables.
///
/// ```
/// use rw_01_wheel_codec::{decode, ConditionType};
///
/// let report = decode("002003005").unwrap();
/// assert_eq!(report.day_of_month, 1);
/// assert_eq!(report.condition, ConditionType::Cholera);
/// assert_eq!(report.case_count, 1);
///
/// assert!(decode("999999999").is_none());
/// ```
pub fn decode(message: &str) -> Option<DecodedMessage> {
    decode_with(&LOOKUP_TABLES, message)
}

/// Decode against an explicit set of tables.
pub fn decode_with(tables: &LookupTables, message: &str) -> Option<DecodedMessage> {
    let message = EncodedMessage::parse(message)?;
    let start = accepted_start(tables, &message)?;

    let day_code: u32 = message.day_code().parse().ok()?;
    let condition_code: u32 = message.condition_code().parse().ok()?;
    let case_code: u32 = message.case_code().parse().ok()?;

    // exact: all three codes were found in tables built from these products
    let day_of_month = day_code / prime_at(start)?;
    let condition = ConditionType::from_rank(condition_code / prime_at(start + 1)?)?;
    let case_count = case_code / prime_at(start + 2)?;

    Some(DecodedMessage {
        day_of_month,
        condition,
        case_count,
    })
}

/// First start index (ascending) whose three segments are all consistent.
fn accepted_start(tables: &LookupTables, message: &EncodedMessage) -> Option<usize> {
    tables
        .day_candidates(message.day_code())?
        .iter()
        .copied()
        .find(|&start| {
            tables
                .condition_at(start + 1, message.condition_code())
                .is_some()
                && tables.case_valid_at(start + 2, message.case_code())
        })
}
