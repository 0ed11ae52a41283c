//! Payout identifiers: IFSC codes, UPI ids and account holder names.
//!
//! Bank account numbers are plain digit strings and use
//! [`digits`](super::digits) directly.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static IFSC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());

static UPI_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9._-]{2,}@[a-zA-Z0-9._-]{2,}$").unwrap());

/// Longest UPI id the payment switch accepts.
pub const UPI_MAX_LEN: usize = 50;

/// Uppercases and trims an IFSC code.
///
/// ```rust
/// use courtside_validator::validators::banking::normalize_ifsc;
///
/// assert_eq!(normalize_ifsc(" sbin0001234 "), "SBIN0001234");
/// ```
pub fn normalize_ifsc(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

// ============================================================================
// IFSC
// ============================================================================

crate::validator! {
    /// Validates an IFSC code: four letters, a literal `0`, six alphanumerics.
    ///
    /// Input is uppercase-normalized before matching, so `sbin0001234` passes.
    pub Ifsc for str;
    rule(input) { IFSC_REGEX.is_match(&normalize_ifsc(input)) }
    error(input) {
        ValidationError::new("ifsc_format", "Please enter a valid IFSC code (e.g. SBIN0001234)")
            .with_param("expected", "AAAA0XXXXXX")
    }
    fn ifsc();
}

// ============================================================================
// UPI
// ============================================================================

crate::validator! {
    /// Validates a UPI virtual payment address (`name@provider`).
    pub UpiId for str;
    rule(input) {
        let input = input.trim();
        input.len() <= UPI_MAX_LEN && UPI_REGEX.is_match(input)
    }
    error(input) {
        if input.trim().len() > UPI_MAX_LEN {
            ValidationError::max_length(UPI_MAX_LEN, input.trim().len())
                .with_message(format!("UPI ID must be at most {UPI_MAX_LEN} characters"))
        } else {
            ValidationError::new("upi_format", "Please enter a valid UPI ID (e.g. name@bank)")
        }
    }
    fn upi_id();
}

// ============================================================================
// ACCOUNT HOLDER NAME
// ============================================================================

crate::validator! {
    /// Validates that a name contains only letters, spaces and periods.
    pub PersonName for str;
    rule(input) {
        input.chars().all(|c| c.is_alphabetic() || c == ' ' || c == '.')
    }
    error(input) {
        ValidationError::new(
            "name_charset",
            "Name can only contain letters, spaces and periods",
        )
    }
    fn person_name();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("SBIN0001234", true)]
    #[case("sbin0001234", true)]
    #[case("HDFC0ABC123", true)]
    #[case("SBIN1001234", false)] // fifth char must be 0
    #[case("SBI00001234", false)]
    #[case("SBIN000123", false)]
    #[case("SBIN00012345", false)]
    fn test_ifsc(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(ifsc().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("user@upi", true)]
    #[case("shop.owner-1@okhdfcbank", true)]
    #[case("a@upi", false)]
    #[case("user@b", false)]
    #[case("user@@upi", false)]
    #[case("user upi", false)]
    fn test_upi(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(upi_id().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_upi_too_long() {
        let long = format!("{}@upi", "a".repeat(48));
        let error = upi_id().validate(&long).unwrap_err();
        assert_eq!(error.code, "max_length");
    }

    #[test]
    fn test_person_name() {
        assert!(person_name().validate("R. K. Sharma").is_ok());
        assert!(person_name().validate("Sharma & Sons").is_err());
        assert!(person_name().validate("Agent 007").is_err());
    }
}
