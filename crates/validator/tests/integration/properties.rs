//! Property tests for the field functions.

use courtside_validator::fields;
use proptest::prelude::*;

proptest! {
    #[test]
    fn name_length_bounds(name in "[a-zA-Z]{0,120}") {
        let report = fields::validate_full_name(&name, true);
        let len = name.chars().count();
        prop_assert_eq!(report.is_valid, (2..=100).contains(&len));
        prop_assert_eq!(report.errors.is_empty(), report.is_valid);
    }

    #[test]
    fn venue_name_length_bounds(name in "[a-z ]{0,220}") {
        let report = fields::validate_venue_name(&name);
        let len = name.trim().chars().count();
        prop_assert_eq!(report.is_valid, (2..=200).contains(&len));
    }

    #[test]
    fn address_length_bounds(address in "[a-z0-9 ,]{0,520}") {
        let report = fields::validate_address(&address);
        let len = address.trim().chars().count();
        prop_assert_eq!(report.is_valid, (10..=500).contains(&len));
        if !report.is_valid {
            prop_assert!(!report.errors.is_empty());
        }
    }

    #[test]
    fn mobile_numbers_format_to_canonical(first in 6u8..=9, rest in "[0-9]{9}") {
        let raw = format!("{first}{rest}");
        let formatted = fields::format_phone_number(&raw);
        prop_assert_eq!(&formatted, &format!("+91{raw}"));
        prop_assert!(fields::validate_phone_number(&formatted).is_valid);
    }

    #[test]
    fn non_mobile_prefixes_fail(first in 0u8..=5, rest in "[0-9]{9}") {
        let raw = format!("{first}{rest}");
        let formatted = fields::format_phone_number(&raw);
        prop_assert!(!fields::validate_phone_number(&formatted).is_valid);
    }

    #[test]
    fn validation_is_idempotent(value in ".{0,40}") {
        prop_assert_eq!(fields::validate_upi_id(&value), fields::validate_upi_id(&value));
        prop_assert_eq!(fields::validate_time(&value), fields::validate_time(&value));
        prop_assert_eq!(
            fields::validate_phone_number(&value),
            fields::validate_phone_number(&value)
        );
    }

    #[test]
    fn time_strings_in_range_pass(hour in 0u8..24, minute in 0u8..60) {
        let time = format!("{hour:02}:{minute:02}");
        prop_assert!(fields::validate_time(&time).is_valid);
    }
}
