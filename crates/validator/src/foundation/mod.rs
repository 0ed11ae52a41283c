//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Verdict**: [`ValidationReport`]
//!
//! Rules are expressed as small `Validate` structs returning one
//! [`ValidationError`]. Composite checks collect those into
//! [`ValidationErrors`] without short-circuiting, and the result is handed to
//! callers as a [`ValidationReport`].
//!
//! ```rust
//! use courtside_validator::foundation::{Validate, ValidationErrors, ValidationReport};
//! use courtside_validator::validators::{digits, not_blank};
//!
//! let mut errors = ValidationErrors::new();
//! for result in [not_blank().validate("40005"), digits(6, 6).validate("40005")] {
//!     if let Err(error) = result {
//!         errors.add(error);
//!     }
//! }
//! let report = ValidationReport::from(errors);
//! assert_eq!(report.errors.len(), 1);
//! ```

pub mod error;
pub mod report;
pub mod traits;

pub use error::{Params, ValidationError, ValidationErrors};
pub use report::ValidationReport;
pub use traits::{Validate, ValidateExt};
