//! End-to-end checks of the public field functions.

use courtside_validator::fields;
use courtside_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn phone_formats_then_validates() {
    let formatted = fields::format_phone_number("9876543210");
    assert_eq!(formatted, "+919876543210");
    assert_eq!(
        fields::validate_phone_number(&formatted),
        ValidationReport::valid()
    );
}

#[test]
fn five_digit_pincode_asks_for_six() {
    let report = fields::validate_pincode("40005", true);
    assert!(!report.is_valid);
    assert_eq!(report.errors, vec!["Please enter a valid 6-digit pincode".to_string()]);
}

#[test]
fn lowercase_ifsc_is_normalized() {
    assert_eq!(
        courtside_validator::validators::banking::normalize_ifsc("sbin0001234"),
        "SBIN0001234"
    );
    assert!(fields::validate_ifsc("sbin0001234").is_valid);
}

#[test]
fn report_serializes_camel_case() {
    let report = fields::validate_address("Short");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "isValid": false,
            "errors": ["Address must be at least 10 characters"],
        })
    );
}

#[test]
fn custom_limits_apply() {
    let limits = FieldLimits::from_json_str(r#"{ "courts_max": 8, "max_price": 2500 }"#).unwrap();
    let rules = FieldRules::new(limits);
    assert!(rules.validate_courts(8).is_valid);
    assert_eq!(
        rules.validate_courts(9).errors,
        vec!["Number of courts must be between 1 and 8".to_string()]
    );
    assert!(!rules.validate_price(3000.0).is_valid);
    assert!(fields::validate_price(3000.0).is_valid);
}

#[test]
fn composed_rule_structs() {
    let pincode = compose![not_blank(), digits(6, 6)];
    assert!(pincode.validate("560001").is_ok());
    assert_eq!(pincode.validate("").unwrap_err().code, "required");

    let price = greater_than(0.0).and(at_most(2_500.0));
    assert!(price.validate(&2_500.0).is_ok());
    assert_eq!(price.validate(&0.0).unwrap_err().code, "greater_than");
    assert_eq!(price.validate(&2_600.0).unwrap_err().code, "max");
}
