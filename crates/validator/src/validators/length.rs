//! String length validators
//!
//! Form input arrives untrimmed, so every rule here measures the trimmed
//! value. Length is counted in Unicode scalar values (chars), which matches
//! how operators perceive names typed in Indic scripts.

use crate::foundation::ValidationError;

/// Trimmed char count.
#[inline]
pub(crate) fn trimmed_len(input: &str) -> usize {
    input.trim().chars().count()
}

// ============================================================================
// NOT BLANK
// ============================================================================

crate::validator! {
    /// Validates that a string has content after trimming whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("required", "Value must not be empty") }
    fn not_blank();
}

// ============================================================================
// TRIMMED LENGTH
// ============================================================================

crate::validator! {
    /// Validates that the trimmed string length is within `[min, max]`.
    ///
    /// ```rust
    /// use courtside_validator::validators::trimmed_length;
    /// use courtside_validator::foundation::Validate;
    ///
    /// let v = trimmed_length(2, 5);
    /// assert!(v.validate("  ab  ").is_ok());
    /// assert!(v.validate(" a ").is_err());
    /// assert!(v.validate("abcdef").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TrimmedLength { min: usize, max: usize } for str;
    rule(self, input) {
        let len = trimmed_len(input);
        len >= self.min && len <= self.max
    }
    error(self, input) {
        let len = trimmed_len(input);
        if len < self.min {
            ValidationError::min_length(self.min, len)
        } else {
            ValidationError::max_length(self.max, len)
        }
    }
    fn trimmed_length(min: usize, max: usize);
}

// ============================================================================
// MAX TRIMMED LENGTH
// ============================================================================

crate::validator! {
    /// Validates that the trimmed string is at most `max` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxTrimmedLength { max: usize } for str;
    rule(self, input) { trimmed_len(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, trimmed_len(input)) }
    fn max_trimmed_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
