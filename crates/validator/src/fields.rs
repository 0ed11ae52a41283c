//! Per-field validation functions.
//!
//! Every function here returns a [`ValidationReport`] and never panics. The
//! rule structs in [`validators`](crate::validators) produce generic
//! messages; this module rewrites them with the field's label so the form
//! layer can show them directly.
//!
//! Optional text fields treat a blank (after trim) value as absent.
//!
//! The free functions are bound to [`FieldLimits::default`]. Use
//! [`FieldRules::new`] to validate against a loaded configuration.

use std::sync::LazyLock;

use crate::combinators::Each;
use crate::config::FieldLimits;
use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationReport};
use crate::validators::{self, banking::normalize_ifsc, phone::normalize_mobile};

static DEFAULT_RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::default);

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Rewrites a length error as "`label` must be at least/most N characters".
fn length_message(label: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "min_length" => format!(
            "{label} must be at least {} characters",
            error.param("min").unwrap_or_default()
        ),
        "max_length" => format!(
            "{label} must be at most {} characters",
            error.param("max").unwrap_or_default()
        ),
        _ => format!("{label}: {}", error.message),
    }
}

fn checked(label: &str, field: &str, result: Result<(), ValidationError>) -> ValidationReport {
    match result {
        Ok(()) => ValidationReport::valid(),
        Err(error) => {
            tracing::trace!(field, code = %error.code, "field check failed");
            ValidationReport::invalid(length_message(label, &error))
        }
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// Field validators bound to one set of [`FieldLimits`].
///
/// ```rust
/// use courtside_validator::{FieldLimits, FieldRules};
///
/// let limits = FieldLimits { max_price: 5_000.0, ..FieldLimits::default() };
/// let rules = FieldRules::new(limits);
/// assert!(rules.validate_price(4_000.0).is_valid);
/// assert!(!rules.validate_price(6_000.0).is_valid);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules {
    limits: FieldLimits,
}

impl FieldRules {
    /// Binds the rules to `limits`.
    pub fn new(limits: FieldLimits) -> Self {
        Self { limits }
    }

    /// The bound limits.
    pub fn limits(&self) -> &FieldLimits {
        &self.limits
    }

    fn text(
        &self,
        label: &str,
        field: &str,
        value: &str,
        required: bool,
        min: usize,
        max: usize,
    ) -> ValidationReport {
        if blank(value) {
            return if required {
                ValidationReport::invalid(ValidationError::required(field.to_owned(), label).message)
            } else {
                ValidationReport::valid()
            };
        }
        checked(label, field, validators::trimmed_length(min, max).validate(value))
    }

    // ── Names and addresses ─────────────────────────────────────────────

    /// First, last or full name of a person.
    pub fn validate_person_name(&self, label: &str, value: &str, required: bool) -> ValidationReport {
        let l = &self.limits;
        self.text(label, "name", value, required, l.person_name_min, l.person_name_max)
    }

    /// Operator's full name.
    pub fn validate_full_name(&self, value: &str, required: bool) -> ValidationReport {
        self.validate_person_name("Full name", value, required)
    }

    /// Venue name (mandatory).
    pub fn validate_venue_name(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("Venue name", "venue_name", value, true, l.venue_name_min, l.venue_name_max)
    }

    /// Arena name (mandatory).
    pub fn validate_arena_name(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("Arena name", "arena_name", value, true, l.arena_name_min, l.arena_name_max)
    }

    /// Street address (mandatory).
    pub fn validate_address(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("Address", "address", value, true, l.address_min, l.address_max)
    }

    /// City; blank is accepted.
    pub fn validate_city(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("City", "city", value, false, l.region_min, l.region_max)
    }

    /// State; blank is accepted.
    pub fn validate_state(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("State", "state", value, false, l.region_min, l.region_max)
    }

    /// Postal pincode: exactly `pincode_len` ASCII digits.
    pub fn validate_pincode(&self, value: &str, required: bool) -> ValidationReport {
        let len = self.limits.pincode_len;
        let pincode = crate::compose![validators::not_blank(), validators::digits(len, len)];
        match pincode.validate(value.trim()) {
            Ok(()) => ValidationReport::valid(),
            Err(error) if error.code == "required" => {
                if required {
                    ValidationReport::invalid("Pincode is required")
                } else {
                    ValidationReport::valid()
                }
            }
            Err(error) => {
                tracing::trace!(field = "pincode", code = %error.code, "field check failed");
                ValidationReport::invalid(format!("Please enter a valid {len}-digit pincode"))
            }
        }
    }

    // ── Contact ─────────────────────────────────────────────────────────

    /// Email address; blank is accepted.
    pub fn validate_email(&self, value: &str) -> ValidationReport {
        if blank(value) {
            return ValidationReport::valid();
        }
        match validators::email().validate(value.trim()) {
            Ok(()) => ValidationReport::valid(),
            Err(_) => ValidationReport::invalid("Please enter a valid email address"),
        }
    }

    /// Indian mobile number, normalized before matching.
    ///
    /// Messages name the problem without a field label, so callers can
    /// prefix them ("WhatsApp number: ...").
    pub fn validate_phone_number(&self, value: &str) -> ValidationReport {
        let result = validators::indian_mobile().validate(value);
        if let Err(error) = &result {
            tracing::trace!(field = "phone", code = %error.code, "field check failed");
        }
        ValidationReport::from(result)
    }

    // ── Time ────────────────────────────────────────────────────────────

    /// 24-hour `HH:MM`.
    pub fn validate_time(&self, value: &str) -> ValidationReport {
        match validators::time_of_day().validate(value) {
            Ok(()) => ValidationReport::valid(),
            Err(error) if error.code == "required" => ValidationReport::invalid(error.message),
            Err(error) => {
                tracing::trace!(field = "time", code = %error.code, "field check failed");
                ValidationReport::invalid("Please enter a valid time in HH:MM format (00:00-23:59)")
            }
        }
    }

    // ── Payout ──────────────────────────────────────────────────────────

    /// Bank account number; blank is accepted.
    pub fn validate_bank_account_number(&self, value: &str) -> ValidationReport {
        if blank(value) {
            return ValidationReport::valid();
        }
        let l = &self.limits;
        match validators::digits(l.account_number_min, l.account_number_max).validate(value.trim()) {
            Ok(()) => ValidationReport::valid(),
            Err(_) => ValidationReport::invalid(format!(
                "Account number must be {}-{} digits",
                l.account_number_min, l.account_number_max
            )),
        }
    }

    /// IFSC code, uppercased before matching; blank is accepted.
    pub fn validate_ifsc(&self, value: &str) -> ValidationReport {
        if blank(value) {
            return ValidationReport::valid();
        }
        ValidationReport::from(validators::ifsc().validate(&normalize_ifsc(value)))
    }

    /// Bank account holder name; blank is accepted.
    pub fn validate_account_holder_name(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        let mut report = self.text(
            "Account holder name",
            "bank_account_holder",
            value,
            false,
            l.holder_name_min,
            l.holder_name_max,
        );
        if !blank(value) {
            if let Err(error) = validators::person_name().validate(value.trim()) {
                report.push(format!("Account holder name: {}", error.message));
            }
        }
        report
    }

    /// UPI id; blank is accepted.
    pub fn validate_upi_id(&self, value: &str) -> ValidationReport {
        if blank(value) {
            return ValidationReport::valid();
        }
        ValidationReport::from(validators::upi_id().validate(value.trim()))
    }

    // ── Lists and free text ─────────────────────────────────────────────

    /// Amenity list: bounded entry count, each entry length-checked.
    ///
    /// Every bad entry is reported.
    pub fn validate_amenities<S: AsRef<str>>(&self, amenities: &[S]) -> ValidationReport {
        let l = &self.limits;
        let mut report = ValidationReport::valid();

        if validators::max_size::<S>(l.max_amenities).validate(amenities).is_err() {
            report.push(format!("You can add at most {} amenities", l.max_amenities));
        }

        let entry = validators::trimmed_length(l.amenity_min, l.amenity_max);
        for amenity in amenities {
            let amenity = amenity.as_ref();
            if entry.validate(amenity).is_err() {
                report.push(format!(
                    "Amenity \"{}\" must be {}-{} characters",
                    amenity.trim(),
                    l.amenity_min,
                    l.amenity_max
                ));
            }
        }
        report
    }

    /// Venue rules or cancellation policy; blank is accepted.
    pub fn validate_rules(&self, value: &str) -> ValidationReport {
        let l = &self.limits;
        self.text("Rules", "rules", value, false, l.rules_min, l.rules_max)
    }

    /// Free-form description; blank is accepted.
    pub fn validate_description(&self, value: &str) -> ValidationReport {
        checked(
            "Description",
            "description",
            validators::max_trimmed_length(self.limits.max_description).validate(value),
        )
    }

    /// Image URI list.
    pub fn validate_images<S: AsRef<str>>(&self, images: &[S]) -> ValidationReport {
        let max = self.limits.max_images;
        let mut report = ValidationReport::valid();
        if validators::max_size::<S>(max).validate(images).is_err() {
            report.push(format!("You can add at most {max} images"));
        }
        for (index, _) in Each::<_, S>::new(validators::not_blank()).failures(images) {
            report.push(format!("Image {} has an empty URI", index + 1));
        }
        report
    }

    // ── Numbers ─────────────────────────────────────────────────────────

    /// Number of courts or fields.
    pub fn validate_courts(&self, courts: u32) -> ValidationReport {
        let l = &self.limits;
        match validators::in_range(l.courts_min, l.courts_max).validate(&courts) {
            Ok(()) => ValidationReport::valid(),
            Err(_) => ValidationReport::invalid(format!(
                "Number of courts must be between {} and {}",
                l.courts_min, l.courts_max
            )),
        }
    }

    /// Slot duration in minutes.
    pub fn validate_slot_duration(&self, minutes: u32) -> ValidationReport {
        let l = &self.limits;
        match validators::in_range(l.slot_duration_min, l.slot_duration_max).validate(&minutes) {
            Ok(()) => ValidationReport::valid(),
            Err(_) => ValidationReport::invalid(format!(
                "Slot duration must be between {} and {} minutes",
                l.slot_duration_min, l.slot_duration_max
            )),
        }
    }

    /// Hourly price: strictly positive and at most the ceiling.
    pub fn validate_price(&self, price: f64) -> ValidationReport {
        let max = self.limits.max_price;
        let bounds = validators::greater_than(0.0).and(validators::at_most(max));
        match bounds.validate(&price) {
            Ok(()) => ValidationReport::valid(),
            Err(error) if error.code == "greater_than" => {
                ValidationReport::invalid("Price must be greater than 0")
            }
            Err(_) => ValidationReport::invalid(format!("Price cannot exceed {max}")),
        }
    }
}

// ============================================================================
// FREE FUNCTIONS (default limits)
// ============================================================================

/// Normalizes a phone number to `+91XXXXXXXXXX`.
///
/// Input that cannot be normalized comes back trimmed but otherwise
/// unchanged, so [`validate_phone_number`] reports it.
///
/// ```rust
/// use courtside_validator::fields::format_phone_number;
///
/// assert_eq!(format_phone_number("98765 43210"), "+919876543210");
/// assert_eq!(format_phone_number(" 12345 "), "12345");
/// ```
pub fn format_phone_number(raw: &str) -> String {
    normalize_mobile(raw).unwrap_or_else(|_| raw.trim().to_owned())
}

/// See [`FieldRules::validate_phone_number`].
pub fn validate_phone_number(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_phone_number(value)
}

/// See [`FieldRules::validate_person_name`].
pub fn validate_person_name(label: &str, value: &str, required: bool) -> ValidationReport {
    DEFAULT_RULES.validate_person_name(label, value, required)
}

/// See [`FieldRules::validate_full_name`].
pub fn validate_full_name(value: &str, required: bool) -> ValidationReport {
    DEFAULT_RULES.validate_full_name(value, required)
}

/// See [`FieldRules::validate_venue_name`].
pub fn validate_venue_name(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_venue_name(value)
}

/// See [`FieldRules::validate_arena_name`].
pub fn validate_arena_name(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_arena_name(value)
}

/// See [`FieldRules::validate_address`].
pub fn validate_address(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_address(value)
}

/// See [`FieldRules::validate_city`].
pub fn validate_city(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_city(value)
}

/// See [`FieldRules::validate_state`].
pub fn validate_state(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_state(value)
}

/// See [`FieldRules::validate_pincode`].
pub fn validate_pincode(value: &str, required: bool) -> ValidationReport {
    DEFAULT_RULES.validate_pincode(value, required)
}

/// See [`FieldRules::validate_email`].
pub fn validate_email(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_email(value)
}

/// See [`FieldRules::validate_time`].
pub fn validate_time(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_time(value)
}

/// See [`FieldRules::validate_bank_account_number`].
pub fn validate_bank_account_number(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_bank_account_number(value)
}

/// See [`FieldRules::validate_ifsc`].
pub fn validate_ifsc(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_ifsc(value)
}

/// See [`FieldRules::validate_account_holder_name`].
pub fn validate_account_holder_name(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_account_holder_name(value)
}

/// See [`FieldRules::validate_upi_id`].
pub fn validate_upi_id(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_upi_id(value)
}

/// See [`FieldRules::validate_amenities`].
pub fn validate_amenities<S: AsRef<str>>(amenities: &[S]) -> ValidationReport {
    DEFAULT_RULES.validate_amenities(amenities)
}

/// See [`FieldRules::validate_rules`].
pub fn validate_rules(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_rules(value)
}

/// See [`FieldRules::validate_description`].
pub fn validate_description(value: &str) -> ValidationReport {
    DEFAULT_RULES.validate_description(value)
}

/// See [`FieldRules::validate_images`].
pub fn validate_images<S: AsRef<str>>(images: &[S]) -> ValidationReport {
    DEFAULT_RULES.validate_images(images)
}

/// See [`FieldRules::validate_courts`].
pub fn validate_courts(courts: u32) -> ValidationReport {
    DEFAULT_RULES.validate_courts(courts)
}

/// See [`FieldRules::validate_slot_duration`].
pub fn validate_slot_duration(minutes: u32) -> ValidationReport {
    DEFAULT_RULES.validate_slot_duration(minutes)
}

/// See [`FieldRules::validate_price`].
pub fn validate_price(price: f64) -> ValidationReport {
    DEFAULT_RULES.validate_price(price)
}

/// The shared default-limits rules.
pub fn default_rules() -> &'static FieldRules {
    &DEFAULT_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn full_name_required_only_when_mandatory() {
        assert_eq!(
            validate_full_name("  ", true).errors,
            vec!["Full name is required".to_string()]
        );
        assert!(validate_full_name("  ", false).is_valid);
        assert_eq!(
            validate_full_name("A", false).errors,
            vec!["Full name must be at least 2 characters".to_string()]
        );
    }

    #[test]
    fn venue_name_upper_bound() {
        assert!(validate_venue_name(&"v".repeat(200)).is_valid);
        assert_eq!(
            validate_venue_name(&"v".repeat(201)).errors,
            vec!["Venue name must be at most 200 characters".to_string()]
        );
    }

    #[rstest]
    #[case("12 MG Road, Bengaluru", true)]
    #[case("Short", false)]
    #[case("", false)]
    fn address(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(validate_address(value).is_valid, ok);
    }

    #[rstest]
    #[case("", true)]
    #[case("Mumbai", true)]
    #[case("M", false)]
    fn city_is_optional(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(validate_city(value).is_valid, ok);
        assert_eq!(validate_state(value).is_valid, ok);
    }

    #[test]
    fn pincode_message_asks_for_six_digits() {
        let report = validate_pincode("40005", true);
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("6-digit pincode"));
        assert!(validate_pincode("400050", true).is_valid);
        assert!(validate_pincode("", false).is_valid);
        assert_eq!(validate_pincode("", true).errors, vec!["Pincode is required".to_string()]);
    }

    #[test]
    fn phone_round_trip() {
        let formatted = format_phone_number("9876543210");
        assert_eq!(formatted, "+919876543210");
        assert!(validate_phone_number(&formatted).is_valid);
        assert!(!validate_phone_number("5876543210").is_valid);
        assert!(!validate_phone_number("").is_valid);
    }

    #[test]
    fn email_optional() {
        assert!(validate_email("").is_valid);
        assert!(validate_email("owner@example.com").is_valid);
        assert!(!validate_email("owner@example").is_valid);
    }

    #[rstest]
    #[case("06:00", true)]
    #[case("23:59", true)]
    #[case("24:00", false)]
    #[case("7:30", false)]
    #[case("", false)]
    fn time(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(validate_time(value).is_valid, ok);
    }

    #[test]
    fn ifsc_lowercase_accepted() {
        assert!(validate_ifsc("sbin0001234").is_valid);
        assert!(!validate_ifsc("SBIN1001234").is_valid);
        assert!(validate_ifsc("").is_valid);
    }

    #[test]
    fn holder_name_reports_charset_and_length() {
        assert!(validate_account_holder_name("R. K. Sharma").is_valid);
        let report = validate_account_holder_name("7");
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn account_number_digits() {
        assert!(validate_bank_account_number("123456789").is_valid);
        assert_eq!(
            validate_bank_account_number("12345").errors,
            vec!["Account number must be 9-18 digits".to_string()]
        );
    }

    #[test]
    fn upi() {
        assert!(validate_upi_id("user@upi").is_valid);
        assert!(!validate_upi_id("user").is_valid);
    }

    #[test]
    fn amenities_report_every_bad_entry() {
        let amenities = ["Parking", "X", "Y"];
        let report = validate_amenities(&amenities);
        assert_eq!(report.errors.len(), 2);

        let too_many: Vec<String> = (0..21).map(|i| format!("Amenity {i}")).collect();
        assert_eq!(validate_amenities(&too_many).errors.len(), 1);
        assert!(validate_amenities::<&str>(&[]).is_valid);
    }

    #[test]
    fn rules_optional_but_bounded() {
        assert!(validate_rules("").is_valid);
        assert!(!validate_rules("No shoes").is_valid);
        assert!(validate_rules("No metal studs on the turf").is_valid);
    }

    #[test]
    fn description_and_images() {
        assert!(validate_description("").is_valid);
        assert!(!validate_description(&"d".repeat(1001)).is_valid);
        assert!(validate_images(&["https://cdn/a.jpg"]).is_valid);
        assert_eq!(
            validate_images(&["https://cdn/a.jpg", " "]).errors,
            vec!["Image 2 has an empty URI".to_string()]
        );
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(20, true)]
    #[case(21, false)]
    fn courts(#[case] value: u32, #[case] ok: bool) {
        assert_eq!(validate_courts(value).is_valid, ok);
    }

    #[rstest]
    #[case(29, false)]
    #[case(30, true)]
    #[case(240, true)]
    #[case(241, false)]
    fn slot_duration(#[case] value: u32, #[case] ok: bool) {
        assert_eq!(validate_slot_duration(value).is_valid, ok);
    }

    #[test]
    fn price_bounds() {
        assert!(validate_price(800.0).is_valid);
        assert!(!validate_price(0.0).is_valid);
        assert!(!validate_price(-5.0).is_valid);
        assert!(!validate_price(f64::NAN).is_valid);
        assert!(!validate_price(100_001.0).is_valid);
        assert_eq!(
            validate_price(-5.0).errors,
            vec!["Price must be greater than 0".to_string()]
        );
        assert_eq!(
            validate_price(100_001.0).errors,
            vec!["Price cannot exceed 100000".to_string()]
        );
    }

    #[test]
    fn pincode_with_letters_is_not_required_error() {
        assert_eq!(
            validate_pincode(" 40O050 ", false).errors,
            vec!["Please enter a valid 6-digit pincode".to_string()]
        );
    }
}
