//! Prelude module for convenient imports.
//!
//! ```rust
//! use courtside_validator::prelude::*;
//!
//! let pincode = not_blank().and(digits(6, 6));
//! assert!(pincode.validate("400050").is_ok());
//! ```

pub use crate::foundation::{
    Validate, ValidateExt, ValidationError, ValidationErrors, ValidationReport,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, Each};

pub use crate::config::{ConfigError, FieldLimits};
pub use crate::fields::FieldRules;

pub use crate::{compose, validator};
