//! EACH combinator - validates each element of a collection

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// Validates each element of a slice.
///
/// Every element is checked; the returned error carries one nested message
/// per failing element, prefixed with its 1-based position.
///
/// ```rust
/// use courtside_validator::combinators::Each;
/// use courtside_validator::foundation::Validate;
/// use courtside_validator::validators::trimmed_length;
///
/// let amenities = Each::new(trimmed_length(2, 50));
/// assert!(amenities.validate(&["Parking", "Showers"][..]).is_ok());
/// assert!(amenities.validate(&["Parking", "X"][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V, T> {
    inner: V,
    _element: PhantomData<fn(&T)>,
}

impl<V, T> Each<V, T>
where
    V: Validate,
    T: AsRef<V::Input>,
{
    /// Creates a new EACH combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _element: PhantomData,
        }
    }

    /// Validates every element, returning `(index, error)` for each failure.
    pub fn failures(&self, input: &[T]) -> Vec<(usize, ValidationError)> {
        input
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                self.inner
                    .validate(element.as_ref())
                    .err()
                    .map(|e| (index, e))
            })
            .collect()
    }
}

impl<V, T> Validate for Each<V, T>
where
    V: Validate,
    T: AsRef<V::Input>,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let failures = self.failures(input);
        if failures.is_empty() {
            return Ok(());
        }

        let messages: Vec<String> = failures
            .iter()
            .map(|(i, e)| format!("#{}: {}", i + 1, e.message))
            .collect();
        let indices: Vec<String> = failures.iter().map(|(i, _)| i.to_string()).collect();

        Err(ValidationError::new(
            "each_failed",
            format!(
                "{} of {} entries are invalid: {}",
                failures.len(),
                input.len(),
                messages.join("; ")
            ),
        )
        .with_param("failed_indices", indices.join(","))
        .with_param("total_count", input.len().to_string()))
    }
}
