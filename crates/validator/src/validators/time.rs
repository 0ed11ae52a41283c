//! 24-hour `HH:MM` time-of-day validator.
//!
//! Slot and opening-hour pickers emit zero-padded `HH:MM` strings. Hours run
//! 00–23 and minutes 00–59; there is no `24:00` and no seconds component.

use crate::foundation::{Validate, ValidationError};

/// Parses a two-digit numeric field from a byte slice at the given offset.
fn parse_two_digits(bytes: &[u8], offset: usize) -> Option<u16> {
    let d1 = bytes.get(offset)?.wrapping_sub(b'0');
    let d2 = bytes.get(offset + 1)?.wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(u16::from(d1) * 10 + u16::from(d2))
}

/// Parses `HH:MM` into minutes since midnight.
///
/// Returns `None` for anything that is not a well-formed 24-hour time.
///
/// ```rust
/// use courtside_validator::validators::time::minutes_since_midnight;
///
/// assert_eq!(minutes_since_midnight("00:00"), Some(0));
/// assert_eq!(minutes_since_midnight("18:30"), Some(1110));
/// assert_eq!(minutes_since_midnight("24:00"), None);
/// assert_eq!(minutes_since_midnight("9:00"), None);
/// ```
pub fn minutes_since_midnight(input: &str) -> Option<u16> {
    let bytes = input.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_two_digits(bytes, 0)?;
    let minute = parse_two_digits(bytes, 3)?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

// ============================================================================
// TIME OF DAY VALIDATOR
// ============================================================================

/// Validates a 24-hour `HH:MM` string.
///
/// ```rust
/// use courtside_validator::validators::TimeOfDay;
/// use courtside_validator::foundation::Validate;
///
/// let v = TimeOfDay;
/// assert!(v.validate("06:00").is_ok());
/// assert!(v.validate("23:59").is_ok());
/// assert!(v.validate("23:60").is_err());
/// assert!(v.validate("6:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeOfDay;

impl Validate for TimeOfDay {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new("required", "Time is required"));
        }

        let bytes = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(ValidationError::new(
                "invalid_time_format",
                "Time must be in HH:MM format",
            )
            .with_param("expected", "HH:MM"));
        }

        let hour = parse_two_digits(bytes, 0)
            .ok_or_else(|| ValidationError::new("invalid_hour", "Hour must be two digits"))?;
        let minute = parse_two_digits(bytes, 3)
            .ok_or_else(|| ValidationError::new("invalid_minute", "Minute must be two digits"))?;

        if hour > 23 {
            return Err(ValidationError::new(
                "invalid_hour",
                format!("Hour {hour} must be between 00 and 23"),
            ));
        }

        if minute > 59 {
            return Err(ValidationError::new(
                "invalid_minute",
                format!("Minute {minute} must be between 00 and 59"),
            ));
        }

        Ok(())
    }
}

/// Creates a time-of-day validator.
#[must_use]
pub const fn time_of_day() -> TimeOfDay {
    TimeOfDay
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("00:00")]
    #[case("09:05")]
    #[case("12:30")]
    #[case("23:59")]
    fn test_valid_times(#[case] input: &str) {
        assert!(time_of_day().validate(input).is_ok());
        assert!(minutes_since_midnight(input).is_some());
    }

    #[rstest]
    #[case("", "required")]
    #[case("24:00", "invalid_hour")]
    #[case("12:60", "invalid_minute")]
    #[case("1:00", "invalid_time_format")]
    #[case("12-00", "invalid_time_format")]
    #[case("12:00:00", "invalid_time_format")]
    #[case("ab:00", "invalid_hour")]
    #[case("10:x0", "invalid_minute")]
    fn test_invalid_times(#[case] input: &str, #[case] code: &str) {
        let error = time_of_day().validate(input).unwrap_err();
        assert_eq!(error.code, code);
        assert!(minutes_since_midnight(input).is_none());
    }

    #[test]
    fn test_minutes_since_midnight_orders() {
        let start = minutes_since_midnight("18:00").unwrap();
        let end = minutes_since_midnight("17:00").unwrap();
        assert!(end < start);
        assert_eq!(minutes_since_midnight("23:59"), Some(23 * 60 + 59));
    }
}
