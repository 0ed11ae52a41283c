//! Character-class and regex validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ============================================================================
// DIGITS
// ============================================================================

crate::validator! {
    /// Validates that a string is made of `min..=max` ASCII digits and
    /// nothing else.
    ///
    /// ```rust
    /// use courtside_validator::validators::digits;
    /// use courtside_validator::foundation::Validate;
    ///
    /// assert!(digits(6, 6).validate("400050").is_ok());
    /// assert!(digits(6, 6).validate("40005").is_err());
    /// assert!(digits(6, 6).validate("４０００５０").is_err()); // full-width digits
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Digits { min: usize, max: usize } for str;
    rule(self, input) {
        input.bytes().all(|b| b.is_ascii_digit())
            && input.len() >= self.min
            && input.len() <= self.max
    }
    error(self, input) {
        let expected = if self.min == self.max {
            format!("exactly {} digits", self.min)
        } else {
            format!("{}-{} digits", self.min, self.max)
        };
        ValidationError::new("digits", format!("Must be {expected}"))
            .with_param("expected", expected)
    }
    fn digits(min: usize, max: usize);
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates the `local@domain.tld` shape.
    ///
    /// Deliberately loose: the backend sends a confirmation mail, which is
    /// the real check.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
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
    #[case("123456789", true)]
    #[case("123456789012345678", true)]
    #[case("12345678", false)]
    #[case("1234567890123456789", false)]
    #[case("12345a789", false)]
    #[case("", false)]
    fn test_digits_range(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(digits(9, 18).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_digits_message() {
        let error = digits(6, 6).validate("12").unwrap_err();
        assert_eq!(error.message, "Must be exactly 6 digits");
    }

    #[rstest]
    #[case("owner@example.com", true)]
    #[case("first.last+tag@sub.domain.in", true)]
    #[case("no-at-sign.com", false)]
    #[case("user@nodot", false)]
    #[case("two words@example.com", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().validate(input).is_ok(), ok);
    }

}
