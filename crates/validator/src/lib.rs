//! # courtside-validator
//!
//! Field validation library for the venue marketplace: single-value rules for
//! names, phone numbers, pincodes, time strings, bank and UPI identifiers,
//! amenity lists and prices.
//!
//! ## Quick Start
//!
//! ```rust
//! use courtside_validator::fields;
//!
//! let phone = fields::format_phone_number("9876543210");
//! assert_eq!(phone, "+919876543210");
//! assert!(fields::validate_phone_number(&phone).is_valid);
//!
//! let report = fields::validate_pincode("40005", true);
//! assert!(!report.is_valid);
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait,
//!   [`ValidationError`](foundation::ValidationError) and the
//!   [`ValidationReport`](foundation::ValidationReport) returned to callers.
//! - [`validators`]: reusable rule structs (length, digits, phone, time,
//!   banking, collections, numeric ranges).
//! - [`combinators`]: `And`, `Each`.
//! - [`fields`]: the per-field functions the onboarding forms call, bound to
//!   configurable [`FieldLimits`](config::FieldLimits).

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use config::{ConfigError, FieldLimits};
pub use fields::FieldRules;
pub use foundation::{Validate, ValidateExt, ValidationError, ValidationErrors, ValidationReport};
