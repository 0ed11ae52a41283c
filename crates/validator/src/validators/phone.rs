//! Indian mobile number normalization and validation.
//!
//! Operators type numbers in every shape (`98765 43210`, `098765-43210`,
//! `+91 98765 43210`). Input is normalized to the canonical
//! `+91XXXXXXXXXX` form before the canonical pattern is applied.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

/// Country calling code prefixed to national numbers.
pub const COUNTRY_CODE: &str = "91";

static CANONICAL_MOBILE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+91[6-9]\d{9}$").unwrap());

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalizes a raw phone number into `+91XXXXXXXXXX`.
///
/// Non-digits are stripped first, then:
/// - 10 digits starting with 6–9 get the country code prefixed;
/// - 12 digits starting with `91` are kept;
/// - 11 digits with a leading `0` drop the zero and get the country code.
///
/// Anything else cannot be normalized.
///
/// ```rust
/// use courtside_validator::validators::phone::normalize_mobile;
///
/// assert_eq!(normalize_mobile("98765 43210").unwrap(), "+919876543210");
/// assert_eq!(normalize_mobile("+91-98765-43210").unwrap(), "+919876543210");
/// assert_eq!(normalize_mobile("09876543210").unwrap(), "+919876543210");
/// assert!(normalize_mobile("12345").is_err());
/// ```
pub fn normalize_mobile(input: &str) -> Result<String, ValidationError> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    let normalized = match digits.len() {
        10 if digits.starts_with(['6', '7', '8', '9']) => format!("+{COUNTRY_CODE}{digits}"),
        12 if digits.starts_with(COUNTRY_CODE) => format!("+{digits}"),
        11 if digits.starts_with('0') => format!("+{COUNTRY_CODE}{}", &digits[1..]),
        count => {
            return Err(ValidationError::new(
                "phone_unrecognized",
                "Please enter a valid 10-digit mobile number",
            )
            .with_param("digits", count.to_string()));
        }
    };

    Ok(normalized)
}

// ============================================================================
// INDIAN MOBILE VALIDATOR
// ============================================================================

/// Validates a phone number against the canonical Indian mobile pattern
/// (`+91` followed by a digit 6–9 and nine more digits).
///
/// The input is normalized first, so `9876543210`, `098765-43210` and
/// `+919876543210` are all accepted.
///
/// ```rust
/// use courtside_validator::validators::indian_mobile;
/// use courtside_validator::foundation::Validate;
///
/// assert!(indian_mobile().validate("+919876543210").is_ok());
/// assert!(indian_mobile().validate("9876543210").is_ok());
/// assert!(indian_mobile().validate("5876543210").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IndianMobile;

impl Validate for IndianMobile {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new("required", "Phone number is required"));
        }

        let normalized = normalize_mobile(input)?;
        if CANONICAL_MOBILE.is_match(&normalized) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone_format",
                "Please enter a valid Indian mobile number starting with 6, 7, 8 or 9",
            )
            .with_param("expected", "+91XXXXXXXXXX"))
        }
    }
}

/// Creates a normalizing Indian mobile validator.
#[must_use]
pub const fn indian_mobile() -> IndianMobile {
    IndianMobile
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("9876543210", "+919876543210")]
    #[case("6000000000", "+916000000000")]
    #[case("919876543210", "+919876543210")]
    #[case("+91 98765 43210", "+919876543210")]
    #[case("09876543210", "+919876543210")]
    #[case("(0) 98765-43210", "+919876543210")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_mobile(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("12345")]
    #[case("5876543210")] // 10 digits but not a mobile prefix
    #[case("19876543210")] // 11 digits without leading zero
    #[case("449876543210")] // 12 digits, foreign code
    #[case("98765432101234")]
    fn test_normalize_rejects(#[case] input: &str) {
        let error = normalize_mobile(input).unwrap_err();
        assert_eq!(error.code, "phone_unrecognized");
    }

    #[test]
    fn test_normalized_but_not_mobile() {
        // 12 digits with country code but a landline-style leading digit
        let v = indian_mobile();
        assert_eq!(v.validate("914012345678").unwrap_err().code, "phone_format");
        // 11 digits with trunk zero followed by a non-mobile digit
        assert_eq!(v.validate("04012345678").unwrap_err().code, "phone_format");
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!(indian_mobile().validate("  ").unwrap_err().code, "required");
    }
}
