//! The caller-facing validation verdict.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationErrors};

/// Pass/fail verdict with every human-readable message.
///
/// This is the shape every field and composite validator hands back to the
/// form layer. It serializes as `{ "isValid": bool, "errors": [..] }`.
///
/// # Examples
///
/// ```rust
/// use courtside_validator::foundation::ValidationReport;
///
/// let mut report = ValidationReport::valid();
/// report.push("End time must be after start time");
/// assert!(!report.is_valid);
///
/// let json = serde_json::to_value(&report).unwrap();
/// assert_eq!(json["isValid"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// `true` iff `errors` is empty.
    pub is_valid: bool,
    /// Messages in the order the rules were evaluated.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A passing report.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing report with a single message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
        }
    }

    /// Appends a message and marks the report invalid.
    pub fn push(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    /// Concatenates another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Concatenates another report, prefixing each of its messages.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors
            .extend(other.errors.into_iter().map(|e| format!("{prefix}: {e}")));
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<Result<(), ValidationError>> for ValidationReport {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.message),
        }
    }
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors: errors.messages(),
        }
    }
}

impl FromIterator<ValidationReport> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationReport>>(iter: I) -> Self {
        let mut combined = Self::valid();
        for report in iter {
            combined.merge(report);
        }
        combined
    }
}
