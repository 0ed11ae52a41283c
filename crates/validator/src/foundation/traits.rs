//! Core traits for the validation system

use crate::combinators::And;
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are generic over their input type and return
/// `Result<(), ValidationError>`. They are pure: validating the same input
/// twice yields the same result.
///
/// # Examples
///
/// ```rust
/// use courtside_validator::foundation::{Validate, ValidationError};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = u32;
///
///     fn validate(&self, input: &u32) -> Result<(), ValidationError> {
///         if *input == 0 {
///             Err(ValidationError::new("non_zero", "Must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&3).is_ok());
/// assert!(NonZero.validate(&0).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type.
///
/// ```rust
/// use courtside_validator::prelude::*;
///
/// let pincode = not_blank().and(digits(6, 6));
/// assert!(pincode.validate("400050").is_ok());
/// assert!(pincode.validate("40005").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
