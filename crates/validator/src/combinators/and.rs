//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The error of the first failing validator is returned.
///
/// ```rust
/// use courtside_validator::combinators::And;
/// use courtside_validator::foundation::Validate;
/// use courtside_validator::validators::{digits, not_blank};
///
/// let pincode = And::new(not_blank(), digits(6, 6));
/// assert!(pincode.validate("560001").is_ok());
/// assert!(pincode.validate("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Validate for Positive {
        type Input = i64;

        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input > 0 {
                Ok(())
            } else {
                Err(ValidationError::new("positive", "Must be positive"))
            }
        }
    }

    struct Small;

    impl Validate for Small {
        type Input = i64;

        fn validate(&self, input: &i64) -> Result<(), ValidationError> {
            if *input < 10 {
                Ok(())
            } else {
                Err(ValidationError::new("small", "Must be below 10"))
            }
        }
    }

    #[test]
    fn test_and_both_pass() {
        assert!(And::new(Positive, Small).validate(&5).is_ok());
    }

    #[test]
    fn test_and_reports_first_failure() {
        let v = And::new(Positive, Small);
        assert_eq!(v.validate(&-20).unwrap_err().code, "positive");
        assert_eq!(v.validate(&20).unwrap_err().code, "small");
    }
}
