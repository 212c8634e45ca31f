//! Prime table and wheel seed selection
//!
//! A report's three fields are multiplied by three *consecutive* entries of
//! the prime table. The first of the three is chosen by the wheel's start
//! index, so a start index is only valid when two more primes follow it.

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// The first 11 primes. Every entry is < 32 so that `31 * prime` still fits
/// into a 3-digit segment.
pub const PRIME_TABLE: [u32; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// Number of consecutive primes consumed by one report
pub const SEEDS_PER_REPORT: usize = 3;

/// Highest start index that still leaves two primes after it
pub const MAX_START_INDEX: usize = PRIME_TABLE.len() - SEEDS_PER_REPORT;

// Three consecutive entries must always be selectable.
const _: () = assert!(PRIME_TABLE.len() >= SEEDS_PER_REPORT);

/// The three primes used for one report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSeeds {
    /// Multiplier for the day-of-month segment
    pub day: u32,
    /// Multiplier for the condition segment
    pub condition: u32,
    /// Multiplier for the case-count segment
    pub cases: u32,
}

impl WheelSeeds {
    /// Select the seeds starting at `start_index`
    pub fn at(start_index: usize) -> Result<Self, WheelError> {
        if start_index > MAX_START_INDEX {
            return Err(WheelError::StartIndexOutOfRange {
                index: start_index,
                max: MAX_START_INDEX,
            });
        }

        Ok(Self {
            day: PRIME_TABLE[start_index],
            condition: PRIME_TABLE[start_index + 1],
            cases: PRIME_TABLE[start_index + 2],
        })
    }
}

/// Prime at `index`, if the index is inside the table
pub fn prime_at(index: usize) -> Option<u32> {
    PRIME_TABLE.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ascending_and_below_32() {
        assert!(PRIME_TABLE.windows(2).all(|w| w[0] < w[1]));
        assert!(PRIME_TABLE.iter().all(|&p| p < 32));
    }

    #[test]
    fn test_max_start_index() {
        assert_eq!(MAX_START_INDEX, 8);
    }

    #[test]
    fn test_seeds_at_first_index() {
        let seeds = WheelSeeds::at(0).unwrap();
        assert_eq!(seeds, WheelSeeds { day: 2, condition: 3, cases: 5 });
    }

    #[test]
    fn test_seeds_at_last_index() {
        let seeds = WheelSeeds::at(MAX_START_INDEX).unwrap();
        assert_eq!(seeds, WheelSeeds { day: 23, condition: 29, cases: 31 });
    }

    #[test]
    fn test_seeds_at_index_six() {
        let seeds = WheelSeeds::at(6).unwrap();
        assert_eq!(seeds, WheelSeeds { day: 17, condition: 19, cases: 23 });
    }

    #[test]
    fn test_seeds_reject_index_past_end() {
        let result = WheelSeeds::at(MAX_START_INDEX + 1);
        assert!(matches!(
            result,
            Err(WheelError::StartIndexOutOfRange { index: 9, max: 8 })
        ));
    }

    #[test]
    fn test_prime_at() {
        assert_eq!(prime_at(4), Some(11));
        assert_eq!(prime_at(PRIME_TABLE.len()), None);
    }
}
