//! Full onboarding runs through the wizard.

use courtside_core::{Arena, DayOfWeek, Slot, Sport};
use courtside_onboarding::*;
use pretty_assertions::assert_eq;

fn operator() -> Session {
    courtside_log::init_test().expect("test logger");
    Session::authenticated(Some(Role::VenueOperator))
}

fn identity() -> StepPayload {
    StepPayload::Identity(IdentityStep {
        name: "Priya Nair".into(),
        email: None,
    })
}

fn venue_basics() -> StepPayload {
    StepPayload::VenueBasics(VenueBasicsStep {
        venue_name: "Ace Sports Arena".into(),
        address: "12 MG Road, Indiranagar".into(),
        city: Some("Bengaluru".into()),
        state: Some("Karnataka".into()),
        pincode: "560038".into(),
        description: Some("Four synthetic badminton courts".into()),
        cover_image: Some("https://cdn.example.com/ace.jpg".into()),
        operating_days: DayOfWeek::ALL.to_vec(),
        opening_time: "06:00".into(),
        closing_time: "23:00".into(),
        contact_phone: "+91 98765 43210".into(),
        whatsapp_number: Some("9876543210".into()),
    })
}

fn arenas() -> StepPayload {
    let mut court = Arena::new("Court 1", Sport::Badminton, 4, 500.0);
    let morning = Slot::from_arena_defaults(&court, DayOfWeek::Monday, "06:00", "07:00");
    court.push_slot(morning);
    StepPayload::Arenas(ArenaDefinitionsStep { arenas: vec![court] })
}

fn amenities() -> StepPayload {
    StepPayload::AmenitiesRules(AmenitiesRulesStep {
        amenities: vec!["Parking".into(), "Drinking water".into()],
        rules: None,
    })
}

fn upi_only() -> StepPayload {
    StepPayload::PayoutDetails(PayoutDetailsStep {
        bank_account_number: Some(String::new()),
        bank_ifsc: Some(String::new()),
        bank_account_holder: Some(String::new()),
        upi_id: Some("user@upi".into()),
    })
}

fn accept(wizard: &mut Wizard, session: &Session, payload: StepPayload) -> WizardState {
    wizard.submit(session, payload).unwrap();
    wizard.acknowledge(BackendOutcome::Accepted).unwrap()
}

#[test]
fn current_flow_runs_to_submitted() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();

    accept(&mut wizard, &session, identity());
    accept(&mut wizard, &session, venue_basics());
    accept(&mut wizard, &session, arenas());
    assert_eq!(
        accept(&mut wizard, &session, amenities()),
        WizardState::Editing(Step::PayoutDetails)
    );
    assert_eq!(accept(&mut wizard, &session, upi_only()), WizardState::Submitted);
    assert_eq!(wizard.profile(), &OnboardingProfile::default());

    assert!(matches!(
        wizard.submit(&session, identity()),
        Err(WizardError::AlreadySubmitted)
    ));
}

#[test]
fn legacy_flow_uses_sports_pricing() {
    let mut wizard = Wizard::new(Flow::Legacy);
    let session = operator();
    accept(&mut wizard, &session, identity());
    accept(&mut wizard, &session, venue_basics());

    let pricing = StepPayload::SportsPricing(SportsPricingStep {
        sport: "Football".into(),
        courts: 2,
        slot_duration: 60,
        price_per_hour: 1800.0,
    });
    assert_eq!(
        accept(&mut wizard, &session, pricing),
        WizardState::Editing(Step::AmenitiesRules)
    );
}

#[test]
fn steps_after_identity_need_a_credential() {
    let mut wizard = Wizard::new(Flow::Current);
    accept(&mut wizard, &Session::anonymous(), identity());

    let err = wizard
        .submit(&Session::anonymous(), venue_basics())
        .unwrap_err();
    assert!(matches!(err, WizardError::NotAuthenticated(Step::VenueBasics)));
    assert_eq!(wizard.state(), WizardState::Editing(Step::VenueBasics));
}

#[test]
fn players_are_forbidden() {
    let mut wizard = Wizard::new(Flow::Current);
    let err = wizard
        .submit(&Session::authenticated(Some(Role::Player)), identity())
        .unwrap_err();
    assert!(matches!(err, WizardError::Forbidden));
}

#[test]
fn invalid_step_stays_put_with_full_report() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();
    accept(&mut wizard, &session, identity());

    let StepPayload::VenueBasics(mut basics) = venue_basics() else {
        unreachable!()
    };
    basics.opening_time = "18:00".into();
    basics.closing_time = "17:00".into();
    basics.pincode = "40005".into();

    let err = wizard
        .submit(&session, StepPayload::VenueBasics(basics))
        .unwrap_err();
    let WizardError::Invalid(report) = err else {
        panic!("expected a validation failure, got {err:?}");
    };
    assert_eq!(
        report.errors,
        vec![
            "Please enter a valid 6-digit pincode".to_string(),
            "End time must be after start time".to_string(),
        ]
    );
    assert_eq!(wizard.state(), WizardState::Editing(Step::VenueBasics));
}

#[test]
fn backend_rejection_is_surfaced_unchanged() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();
    wizard.submit(&session, identity()).unwrap();

    let message = "Email already registered";
    let err = wizard
        .acknowledge(BackendOutcome::Rejected(message.into()))
        .unwrap_err();
    assert_eq!(err.to_string(), message);
    assert_eq!(wizard.state(), WizardState::Editing(Step::Identity));
    assert_eq!(wizard.profile().identity, None);

    accept(&mut wizard, &session, identity());
    assert_eq!(wizard.state(), WizardState::Editing(Step::VenueBasics));
}

#[test]
fn back_keeps_accepted_data() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();
    accept(&mut wizard, &session, identity());
    accept(&mut wizard, &session, venue_basics());

    assert_eq!(wizard.back().unwrap(), WizardState::Editing(Step::VenueBasics));
    assert!(wizard.profile().venue_basics.is_some());
    assert_eq!(wizard.progress(), (2, 5));
}

#[test]
fn submission_body_matches_step_payload() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();
    accept(&mut wizard, &session, identity());
    accept(&mut wizard, &session, venue_basics());
    accept(&mut wizard, &session, arenas());
    accept(&mut wizard, &session, amenities());

    let submission = wizard.submit(&session, upi_only()).unwrap();
    assert_eq!(submission.step, Step::PayoutDetails);
    assert_eq!(
        submission.body,
        serde_json::json!({
            "bank_account_number": null,
            "bank_ifsc": null,
            "bank_account_holder": null,
            "upi_id": "user@upi",
        })
    );
}

#[test]
fn submission_body_carries_normalized_values() {
    let mut wizard = Wizard::new(Flow::Current);
    let session = operator();
    accept(&mut wizard, &session, identity());

    let StepPayload::VenueBasics(mut basics) = venue_basics() else {
        unreachable!()
    };
    basics.venue_name = "  Ace Sports Arena ".into();
    basics.contact_phone = "098765-43210".into();
    basics.whatsapp_number = Some(" 91 98765 43210 ".into());
    let submission = wizard.submit(&session, StepPayload::VenueBasics(basics)).unwrap();
    assert_eq!(submission.body["venue_name"], "Ace Sports Arena");
    assert_eq!(submission.body["contact_phone"], "+919876543210");
    assert_eq!(submission.body["whatsapp_number"], "+919876543210");

    wizard.acknowledge(BackendOutcome::Accepted).unwrap();
    assert_eq!(
        wizard.profile().venue_basics.as_ref().map(|v| v.contact_phone.as_str()),
        Some("+919876543210")
    );
    accept(&mut wizard, &session, arenas());
    accept(&mut wizard, &session, amenities());

    let payout = StepPayload::PayoutDetails(PayoutDetailsStep {
        bank_account_number: Some(" 123456789012 ".into()),
        bank_ifsc: Some("sbin0001234".into()),
        bank_account_holder: Some("Priya Nair ".into()),
        upi_id: None,
    });
    let submission = wizard.submit(&session, payout).unwrap();
    assert_eq!(
        submission.body,
        serde_json::json!({
            "bank_account_number": "123456789012",
            "bank_ifsc": "SBIN0001234",
            "bank_account_holder": "Priya Nair",
            "upi_id": null,
        })
    );
}
