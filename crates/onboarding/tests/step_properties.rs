//! Property checks for the composite step validators.

use courtside_core::EntityRules;
use courtside_onboarding::steps::CLOSING_BEFORE_OPENING;
use courtside_onboarding::*;
use courtside_validator::FieldRules;
use proptest::prelude::*;

fn hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn basics(opening: u16, closing: u16) -> VenueBasicsStep {
    VenueBasicsStep {
        venue_name: "Ace Sports Arena".into(),
        address: "12 MG Road, Indiranagar".into(),
        pincode: "560038".into(),
        cover_image: Some("https://cdn.example.com/ace.jpg".into()),
        operating_days: vec![courtside_core::DayOfWeek::Sunday],
        opening_time: hhmm(opening),
        closing_time: hhmm(closing),
        contact_phone: "9876543210".into(),
        ..Default::default()
    }
}

fn bank_number() -> impl Strategy<Value = String> {
    "[0-9]{9,18}"
}

proptest! {
    #[test]
    fn closing_not_after_opening_is_flagged(opening in 0u16..1440, closing in 0u16..1440) {
        let report = basics(opening, closing).validate(&EntityRules::default());
        let flagged = report.errors.iter().any(|e| e == CLOSING_BEFORE_OPENING);
        prop_assert_eq!(flagged, closing <= opening);
        prop_assert_eq!(report.is_valid, closing > opening);
    }

    #[test]
    fn upi_alone_is_valid(local in "[a-z0-9.]{2,20}", provider in "[a-z]{2,20}") {
        let step = PayoutDetailsStep {
            upi_id: Some(format!("{local}@{provider}")),
            ..Default::default()
        };
        prop_assert!(step.validate(&FieldRules::default()).is_valid);
    }

    #[test]
    fn account_number_alone_adds_two_errors(number in bank_number()) {
        let step = PayoutDetailsStep {
            bank_account_number: Some(number),
            ..Default::default()
        };
        let report = step.validate(&FieldRules::default());
        prop_assert!(!report.is_valid);
        prop_assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn full_bank_group_valid_regardless_of_upi(
        number in bank_number(),
        bank in "[A-Z]{4}",
        branch in "[A-Z0-9]{6}",
        upi in proptest::option::of("[a-z]{2,10}@[a-z]{2,10}"),
    ) {
        let step = PayoutDetailsStep {
            bank_account_number: Some(number),
            bank_ifsc: Some(format!("{bank}0{branch}")),
            bank_account_holder: Some("Priya Nair".into()),
            upi_id: upi,
        };
        prop_assert!(step.validate(&FieldRules::default()).is_valid);
    }

    #[test]
    fn validation_is_idempotent(number in ".{0,20}", upi in ".{0,20}") {
        let step = PayoutDetailsStep {
            bank_account_number: Some(number),
            upi_id: Some(upi),
            ..Default::default()
        };
        let rules = FieldRules::default();
        prop_assert_eq!(step.validate(&rules), step.validate(&rules));
    }
}
