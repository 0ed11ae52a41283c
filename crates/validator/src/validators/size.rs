//! Collection size validators

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// SIZE RANGE
// ============================================================================

/// Validates that a collection has between `min` and `max` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeRange<T> {
    min: usize,
    max: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for SizeRange<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let size = input.len();
        if size < self.min {
            Err(ValidationError::new(
                "min_size",
                format!("Select at least {} item(s)", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", size.to_string()))
        } else if size > self.max {
            Err(ValidationError::new(
                "max_size",
                format!("Select at most {} item(s)", self.max),
            )
            .with_param("max", self.max.to_string())
            .with_param("actual", size.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Creates a validator that checks a collection holds `min..=max` elements.
///
/// ```rust
/// use courtside_validator::validators::size_range;
/// use courtside_validator::foundation::Validate;
///
/// let days = size_range::<u8>(1, 7);
/// assert!(days.validate(&[1, 2, 3]).is_ok());
/// assert!(days.validate(&[]).is_err());
/// ```
#[must_use]
pub fn size_range<T>(min: usize, max: usize) -> SizeRange<T> {
    SizeRange {
        min,
        max,
        _phantom: PhantomData,
    }
}

/// Creates a validator that checks a collection holds at most `max` elements.
#[must_use]
pub fn max_size<T>(max: usize) -> SizeRange<T> {
    size_range(0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range() {
        let v = size_range::<i32>(1, 3);
        assert!(v.validate(&[1]).is_ok());
        assert!(v.validate(&[1, 2, 3]).is_ok());
        assert_eq!(v.validate(&[]).unwrap_err().code, "min_size");
        assert_eq!(v.validate(&[1, 2, 3, 4]).unwrap_err().code, "max_size");
    }

    #[test]
    fn test_max_size() {
        let v = max_size::<String>(2);
        assert!(v.validate(&[]).is_ok());
        assert!(v.validate(&["a".into(), "b".into(), "c".into()]).is_err());
    }
}
