//! Field range checks shared by the encoder and operator front-ends

use std::ops::RangeInclusive;

use crate::error::WheelError;

/// Valid days of the month
pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;

/// Valid case counts; the physical wheels start at 1
pub const CASE_COUNT_RANGE: RangeInclusive<u32> = 1..=20;

/// Check a day-of-month value.
pub fn validate_day(day: u32) -> Result<u32, WheelError> {
    if DAY_RANGE.contains(&day) {
        Ok(day)
    } else {
        Err(WheelError::DayOutOfRange {
            day,
            min: *DAY_RANGE.start(),
            max: *DAY_RANGE.end(),
        })
    }
}

/// Check a case count.
pub fn validate_case_count(count: u32) -> Result<u32, WheelError> {
    if CASE_COUNT_RANGE.contains(&count) {
        Ok(count)
    } else {
        Err(WheelError::CaseCountOutOfRange {
            count,
            min: *CASE_COUNT_RANGE.start(),
            max: *CASE_COUNT_RANGE.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds() {
        assert_eq!(validate_day(1), Ok(1));
        assert_eq!(validate_day(31), Ok(31));
        assert!(matches!(validate_day(0), Err(WheelError::DayOutOfRange { day: 0, .. })));
        assert!(matches!(validate_day(32), Err(WheelError::DayOutOfRange { day: 32, .. })));
    }

    #[test]
    fn test_case_count_bounds() {
        assert_eq!(validate_case_count(1), Ok(1));
        assert_eq!(validate_case_count(20), Ok(20));
        assert!(validate_case_count(0).is_err());
        assert!(matches!(
            validate_case_count(21),
            Err(WheelError::CaseCountOutOfRange { count: 21, min: 1, max: 20 })
        ));
    }
}
