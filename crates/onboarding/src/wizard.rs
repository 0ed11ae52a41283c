//! The onboarding wizard state machine.
//!
//! States are the steps of the chosen [`Flow`] plus a terminal
//! [`WizardState::Submitted`]. A step is left only when its payload passes
//! the step's composite validator and the backend acknowledges it:
//!
//! ```text
//! Editing(step) --submit(valid)--> Pending(step)
//! Pending(step) --ack(success)---> Editing(next) | Submitted
//! Pending(step) --ack(failure)---> Editing(step)
//! Editing(step) --back-----------> Editing(previous)
//! ```

use courtside_core::EntityRules;
use courtside_validator::ValidationReport;

use crate::payout::PayoutDetailsStep;
use crate::session::Session;
use crate::steps::{
    AmenitiesRulesStep, ArenaDefinitionsStep, IdentityStep, SportsPricingStep, Step, StepPayload,
    VenueBasicsStep,
};

// ============================================================================
// FLOW
// ============================================================================

/// Which sequence of screens the operator goes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Arenas with explicit weekly slots.
    #[default]
    Current,
    /// A single sport with court count, slot length and one price.
    Legacy,
}

impl Flow {
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Flow::Current => &[
                Step::Identity,
                Step::VenueBasics,
                Step::Arenas,
                Step::AmenitiesRules,
                Step::PayoutDetails,
            ],
            Flow::Legacy => &[
                Step::Identity,
                Step::VenueBasics,
                Step::SportsPricing,
                Step::AmenitiesRules,
                Step::PayoutDetails,
            ],
        }
    }

    fn position(self, step: Step) -> Option<usize> {
        self.steps().iter().position(|s| *s == step)
    }

    fn next(self, step: Step) -> Option<Step> {
        self.position(step)
            .and_then(|i| self.steps().get(i + 1))
            .copied()
    }

    fn previous(self, step: Step) -> Option<Step> {
        self.position(step)
            .and_then(|i| i.checked_sub(1))
            .map(|i| self.steps()[i])
    }
}

// ============================================================================
// STATE, OUTCOMES, ERRORS
// ============================================================================

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// The operator is filling in `step`.
    Editing(Step),
    /// `step` was sent; waiting for the backend.
    Pending(Step),
    /// Every step was acknowledged.
    Submitted,
}

/// The backend's verdict on a submitted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendOutcome {
    Accepted,
    /// The backend refused; its message is passed through unchanged.
    Rejected(String),
}

/// A validated step ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSubmission {
    pub step: Step,
    /// JSON body for the step's endpoint.
    pub body: serde_json::Value,
}

/// Errors from wizard transitions.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("expected {expected} but got {actual}")]
    OutOfOrder { expected: Step, actual: Step },

    #[error("{0} is not part of this onboarding flow")]
    NotInFlow(Step),

    #[error("sign in before submitting {0}")]
    NotAuthenticated(Step),

    #[error("this account cannot onboard a venue")]
    Forbidden,

    #[error("{0} is awaiting the server's response")]
    AwaitingResponse(Step),

    #[error("nothing is awaiting a response")]
    NothingPending,

    #[error("already at the first step")]
    AtFirstStep,

    #[error("onboarding is already submitted")]
    AlreadySubmitted,

    /// The payload failed its composite validator.
    #[error("step has {} validation error(s)", .0.errors.len())]
    Invalid(ValidationReport),

    /// The backend refused the step.
    #[error("{0}")]
    Backend(String),

    #[error("failed to encode step payload: {0}")]
    Encode(#[from] serde_json::Error),
}

// ============================================================================
// PROFILE
// ============================================================================

/// Accepted step payloads for the session in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingProfile {
    pub identity: Option<IdentityStep>,
    pub venue_basics: Option<VenueBasicsStep>,
    pub sports_pricing: Option<SportsPricingStep>,
    pub arenas: Option<ArenaDefinitionsStep>,
    pub amenities_rules: Option<AmenitiesRulesStep>,
    pub payout_details: Option<PayoutDetailsStep>,
}

impl OnboardingProfile {
    fn record(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::Identity(step) => self.identity = Some(step),
            StepPayload::VenueBasics(step) => self.venue_basics = Some(step),
            StepPayload::SportsPricing(step) => self.sports_pricing = Some(step),
            StepPayload::Arenas(step) => self.arenas = Some(step),
            StepPayload::AmenitiesRules(step) => self.amenities_rules = Some(step),
            StepPayload::PayoutDetails(step) => self.payout_details = Some(step),
        }
    }
}

// ============================================================================
// WIZARD
// ============================================================================

/// Drives one operator through onboarding.
///
/// ```rust
/// use courtside_onboarding::{BackendOutcome, IdentityStep, Session, StepPayload, Wizard, WizardState};
/// use courtside_onboarding::steps::Step;
///
/// let mut wizard = Wizard::new(Default::default());
/// let session = Session::anonymous();
/// let identity = StepPayload::Identity(IdentityStep { name: "Priya Nair".into(), email: None });
///
/// let submission = wizard.submit(&session, identity).unwrap();
/// assert_eq!(submission.body["name"], "Priya Nair");
///
/// let state = wizard.acknowledge(BackendOutcome::Accepted).unwrap();
/// assert_eq!(state, WizardState::Editing(Step::VenueBasics));
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    flow: Flow,
    state: WizardState,
    rules: EntityRules,
    profile: OnboardingProfile,
    pending: Option<StepPayload>,
}

impl Wizard {
    /// Starts at the first step of `flow` with default rules.
    pub fn new(flow: Flow) -> Self {
        Self::with_rules(flow, EntityRules::default())
    }

    pub fn with_rules(flow: Flow, rules: EntityRules) -> Self {
        Self {
            flow,
            state: WizardState::Editing(flow.steps()[0]),
            rules,
            profile: OnboardingProfile::default(),
            pending: None,
        }
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Payloads accepted so far. Cleared once onboarding is submitted.
    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// 1-based position of the current step and the step count.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.flow.steps().len();
        let current = match self.state {
            WizardState::Editing(step) | WizardState::Pending(step) => {
                self.flow.position(step).map_or(total, |i| i + 1)
            }
            WizardState::Submitted => total,
        };
        (current, total)
    }

    /// Validates the payload for the current step and, when it passes,
    /// returns the normalized request body and waits for
    /// [`acknowledge`](Self::acknowledge).
    pub fn submit(
        &mut self,
        session: &Session,
        payload: StepPayload,
    ) -> Result<StepSubmission, WizardError> {
        let expected = match self.state {
            WizardState::Editing(step) => step,
            WizardState::Pending(step) => return Err(WizardError::AwaitingResponse(step)),
            WizardState::Submitted => return Err(WizardError::AlreadySubmitted),
        };

        let step = payload.step();
        if self.flow.position(step).is_none() {
            return Err(WizardError::NotInFlow(step));
        }
        if step != expected {
            return Err(WizardError::OutOfOrder {
                expected,
                actual: step,
            });
        }
        if step.requires_credential() && !session.has_credential() {
            return Err(WizardError::NotAuthenticated(step));
        }
        if !session.may_onboard_venue() {
            return Err(WizardError::Forbidden);
        }

        let report = payload.validate(&self.rules);
        if !report.is_valid {
            tracing::debug!(step = %step, errors = report.errors.len(), "step rejected");
            return Err(WizardError::Invalid(report));
        }

        let payload = payload.normalized();
        let body = payload.body()?;
        self.pending = Some(payload);
        self.state = WizardState::Pending(step);
        tracing::info!(step = %step, "step submitted");

        Ok(StepSubmission { step, body })
    }

    /// Applies the backend's verdict on the pending step.
    ///
    /// A rejection returns the wizard to the same step and surfaces the
    /// backend message unchanged as [`WizardError::Backend`].
    pub fn acknowledge(&mut self, outcome: BackendOutcome) -> Result<WizardState, WizardError> {
        let step = match self.state {
            WizardState::Pending(step) => step,
            WizardState::Submitted => return Err(WizardError::AlreadySubmitted),
            WizardState::Editing(_) => return Err(WizardError::NothingPending),
        };

        match outcome {
            BackendOutcome::Rejected(message) => {
                self.pending = None;
                self.state = WizardState::Editing(step);
                tracing::info!(step = %step, "step refused by server");
                Err(WizardError::Backend(message))
            }
            BackendOutcome::Accepted => {
                if let Some(payload) = self.pending.take() {
                    self.profile.record(payload);
                }
                self.state = match self.flow.next(step) {
                    Some(next) => WizardState::Editing(next),
                    None => {
                        self.profile = OnboardingProfile::default();
                        WizardState::Submitted
                    }
                };
                tracing::info!(from = %step, state = ?self.state, "step accepted");
                Ok(self.state)
            }
        }
    }

    /// Returns to the previous step. Accepted data is kept.
    pub fn back(&mut self) -> Result<WizardState, WizardError> {
        match self.state {
            WizardState::Editing(step) => {
                let previous = self.flow.previous(step).ok_or(WizardError::AtFirstStep)?;
                self.state = WizardState::Editing(previous);
                tracing::info!(from = %step, to = %previous, "moved back");
                Ok(self.state)
            }
            WizardState::Pending(step) => Err(WizardError::AwaitingResponse(step)),
            WizardState::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }
}
