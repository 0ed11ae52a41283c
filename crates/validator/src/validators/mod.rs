//! Built-in validators
//!
//! # Categories
//!
//! - **String**: trimmed length, digit strings, regex, email
//! - **Contact**: Indian mobile numbers
//! - **Time**: 24-hour `HH:MM`
//! - **Payout**: IFSC, UPI id, account holder name
//! - **Numeric**: inclusive range, strict lower bound, upper bound
//! - **Collection**: size range

// String validators
pub mod length;
pub mod pattern;

// Domain formats
pub mod banking;
pub mod phone;
pub mod time;

// Numeric validators
pub mod range;

// Collection validators
pub mod size;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use banking::{Ifsc, PersonName, UpiId, ifsc, person_name, upi_id};
pub use length::{
    MaxTrimmedLength, NotBlank, TrimmedLength, max_trimmed_length, not_blank, trimmed_length,
};
pub use pattern::{Digits, Email, digits, email};
pub use phone::{IndianMobile, indian_mobile};
pub use range::{AtMost, GreaterThan, InRange, at_most, greater_than, in_range};
pub use size::{SizeRange, max_size, size_range};
pub use time::{TimeOfDay, time_of_day};
