//! Numeric range validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// ```rust
    /// use courtside_validator::validators::in_range;
    /// use courtside_validator::foundation::Validate;
    ///
    /// let courts = in_range(1u32, 20u32);
    /// assert!(courts.validate(&1).is_ok());
    /// assert!(courts.validate(&20).is_ok());
    /// assert!(courts.validate(&0).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::out_of_range(self.min, self.max, *input)
    }
    fn in_range(min: T, max: T);
}

crate::validator! {
    /// Validates that a value is strictly greater than a threshold.
    ///
    /// `NaN` never passes.
    ///
    /// ```rust
    /// use courtside_validator::validators::greater_than;
    /// use courtside_validator::foundation::Validate;
    ///
    /// let price = greater_than(0.0);
    /// assert!(price.validate(&0.5).is_ok());
    /// assert!(price.validate(&0.0).is_err());
    /// assert!(price.validate(&f64::NAN).is_err());
    /// ```
    #[derive(Copy, PartialEq)]
    pub GreaterThan<T: PartialOrd + Display + Copy> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new(
            "greater_than",
            format!("Value must be greater than {}", self.bound),
        )
        .with_param("bound", self.bound.to_string())
        .with_param("actual", input.to_string())
    }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub AtMost<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn at_most(max: T);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};

    #[test]
    fn test_in_range_params() {
        let error = in_range(30u32, 240u32).validate(&15).unwrap_err();
        assert_eq!(error.code, "out_of_range");
        assert_eq!(error.param("min"), Some("30"));
        assert_eq!(error.param("actual"), Some("15"));
    }

    #[test]
    fn test_price_bounds() {
        let price = greater_than(0.0).and(at_most(100_000.0));
        assert!(price.validate(&1500.0).is_ok());
        assert!(price.validate(&100_000.0).is_ok());
        assert_eq!(price.validate(&-1.0).unwrap_err().code, "greater_than");
        assert_eq!(price.validate(&100_000.5).unwrap_err().code, "max");
        assert!(price.validate(&f64::INFINITY).is_err());
    }
}
