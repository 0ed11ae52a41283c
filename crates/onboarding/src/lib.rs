//! # Courtside Onboarding
//!
//! Venue operator onboarding: step payloads, their composite validators,
//! payout method resolution and the [`Wizard`] that sequences the steps.
//!
//! ## Flow
//!
//! 1. [`IdentityStep`]: name and optional email
//! 2. [`VenueBasicsStep`]: location, opening hours, contact numbers
//! 3. [`ArenaDefinitionsStep`] (current flow) or [`SportsPricingStep`] (legacy)
//! 4. [`AmenitiesRulesStep`]
//! 5. [`PayoutDetailsStep`]: bank account, UPI id, both or neither
//!
//! Every composite validator returns a [`ValidationReport`] carrying every
//! violated rule, not just the first.
//!
//! [`ValidationReport`]: courtside_validator::ValidationReport

pub mod payout;
pub mod session;
pub mod steps;
pub mod wizard;

pub use payout::{BankAccount, PayoutDetailsStep, PayoutMethod};
pub use session::{Role, Session};
pub use steps::{
    AmenitiesRulesStep, ArenaDefinitionsStep, IdentityStep, SportsPricingStep, Step, StepPayload,
    VenueBasicsStep,
};
pub use wizard::{
    BackendOutcome, Flow, OnboardingProfile, StepSubmission, Wizard, WizardError, WizardState,
};
