//! # Codec Property Tests
//!
//! Exhaustive and property-based checks of the encode/decode scheme.
//!
//! ## Test Categories
//!
//! 1. **Round Trip** - every field combination at every start index
//! 2. **Malformed Input** - wrong length, non-digit content
//! 3. **Tampering** - single-digit mutations of valid codes
//! 4. **Determinism** - ambiguous codes always decode the same way

use proptest::prelude::*;
use rw_01_wheel_codec::{
    decode, encode, ConditionType, DecodedMessage, CASE_COUNT_RANGE, DAY_RANGE, MAX_START_INDEX,
};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn all_inputs() -> impl Iterator<Item = (u32, ConditionType, u32, usize)> {
    (0..=MAX_START_INDEX).flat_map(|start| {
        DAY_RANGE.flat_map(move |day| {
            ConditionType::ALL.into_iter().flat_map(move |condition| {
                CASE_COUNT_RANGE.map(move |cases| (day, condition, cases, start))
            })
        })
    })
}

/// Whether `decoded` is itself a valid encoding of `code` at some start index.
fn is_consistent_encoding(decoded: &DecodedMessage, code: &str) -> bool {
    (0..=MAX_START_INDEX).any(|start| {
        encode(
            decoded.day_of_month,
            decoded.condition,
            decoded.case_count,
            start,
        )
        .map(|m| m.as_str() == code)
        .unwrap_or(false)
    })
}

fn report_strategy() -> impl Strategy<Value = (u32, ConditionType, u32, usize)> {
    (
        DAY_RANGE,
        prop::sample::select(ConditionType::ALL.to_vec()),
        CASE_COUNT_RANGE,
        0..=MAX_START_INDEX,
    )
}

// =============================================================================
// ROUND TRIP
// =============================================================================

#[test]
fn test_round_trip_over_every_input() {
    let mut collisions = Vec::new();

    for (day, condition, cases, start) in all_inputs() {
        let code = encode(day, condition, cases, start).unwrap();
        let decoded = decode(code.as_str()).expect("encoder output must decode");

        let expected = DecodedMessage {
            day_of_month: day,
            condition,
            case_count: cases,
        };
        if decoded != expected {
            // a lower start index explains the same code
            assert!(is_consistent_encoding(&decoded, code.as_str()));
            collisions.push((day, condition, cases, start));
        }
    }

    // The ascending tie-break shadows exactly these inputs:
    //  - start 1, Malaria, even day <= 20, 5 or 10 cases (20)
    //  - start 2, Malaria, even day <= 12, 5 cases (6)
    //  - start 2, Typhoid, day multiple of 3 <= 18, 7 cases (6)
    assert_eq!(collisions.len(), 32);
    for (day, condition, cases, start) in collisions {
        match (start, condition) {
            (1, ConditionType::Malaria) => {
                assert!(day % 2 == 0 && day <= 20);
                assert!(cases == 5 || cases == 10);
            }
            (2, ConditionType::Malaria) => {
                assert!(day % 2 == 0 && day <= 12);
                assert_eq!(cases, 5);
            }
            (2, ConditionType::Typhoid) => {
                assert!(day % 3 == 0 && day <= 18);
                assert_eq!(cases, 7);
            }
            other => panic!("unexpected collision at {:?}", other),
        }
    }
}

#[test]
fn test_round_trip_at_start_zero_is_exact() {
    // nothing sits below index 0, so no collision can shadow it
    for (day, condition, cases, start) in all_inputs().filter(|input| input.3 == 0) {
        let code = encode(day, condition, cases, start).unwrap();
        let decoded = decode(code.as_str()).unwrap();
        assert_eq!(decoded.day_of_month, day);
        assert_eq!(decoded.condition, condition);
        assert_eq!(decoded.case_count, cases);
    }
}

#[test]
fn test_boundary_scenarios() {
    let low = encode(1, ConditionType::Cholera, 1, 0).unwrap();
    assert_eq!(low.as_str(), "002003005");
    assert_eq!(
        decode("002003005"),
        Some(DecodedMessage {
            day_of_month: 1,
            condition: ConditionType::Cholera,
            case_count: 1,
        })
    );

    let last = *ConditionType::ALL.last().unwrap();
    let highest = Some(DecodedMessage {
        day_of_month: 31,
        condition: last,
        case_count: 20,
    });

    // primes 17, 19, 23
    let high = encode(31, last, 20, 6).unwrap();
    assert_eq!(high.day_code(), "527");
    assert_eq!(high.condition_code(), format!("{:03}", last.rank() * 19));
    assert_eq!(high.case_code(), "460");
    assert_eq!(decode(high.as_str()), highest);

    // primes 23, 29, 31: the last window in the table
    let top = encode(31, last, 20, MAX_START_INDEX).unwrap();
    assert_eq!(top.day_code(), "713");
    assert_eq!(top.condition_code(), format!("{:03}", last.rank() * 29));
    assert_eq!(top.case_code(), "620");
    assert_eq!(decode(top.as_str()), highest);

    assert_eq!(decode("12345678"), None);
    assert_eq!(decode("12a456789"), None);
    assert_eq!(decode("999999999"), None);
}

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_ambiguous_code_always_takes_lowest_start() {
    // start 1 encoding of (2, Malaria, 5)
    let code = encode(2, ConditionType::Malaria, 5, 1).unwrap();
    assert_eq!(code.as_str(), "006015035");

    let first = decode(code.as_str()).unwrap();
    assert_eq!(
        first,
        DecodedMessage {
            day_of_month: 3,
            condition: ConditionType::Typhoid,
            case_count: 7,
        }
    );
    for _ in 0..100 {
        assert_eq!(decode(code.as_str()), Some(first));
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_decode_never_panics(input in ".*") {
        let _ = decode(&input);
    }

    #[test]
    fn prop_wrong_length_is_invalid(input in "[0-9]{0,8}|[0-9]{10,16}") {
        prop_assert!(decode(&input).is_none());
    }

    #[test]
    fn prop_non_digit_is_invalid(
        prefix in "[0-9]{0,8}",
        bad in "[^0-9]",
    ) {
        // pad with digits so the character count is 9
        let mut input = prefix.clone();
        input.push_str(&bad);
        while input.chars().count() < 9 {
            input.push('0');
        }
        prop_assert!(decode(&input).is_none());
    }

    #[test]
    fn prop_single_digit_mutation_is_never_mismatched(
        (day, condition, cases, start) in report_strategy(),
        position in 0usize..9,
        digit in 0u8..10,
    ) {
        let code = encode(day, condition, cases, start).unwrap();
        let mut bytes = code.as_str().as_bytes().to_vec();
        bytes[position] = b'0' + digit;
        let mutated = String::from_utf8(bytes).unwrap();

        if let Some(decoded) = decode(&mutated) {
            // whatever is accepted must be one coherent encoding of the mutated code
            prop_assert!(is_consistent_encoding(&decoded, &mutated));
        }
    }

    #[test]
    fn prop_decode_is_deterministic(input in "[0-9]{9}") {
        prop_assert_eq!(decode(&input), decode(&input));
    }
}
