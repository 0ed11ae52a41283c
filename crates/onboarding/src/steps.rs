//! Onboarding step payloads and their composite validators.
//!
//! Each payload mirrors the JSON object sent for its step. `validate`
//! re-checks the whole step on submit and reports every violated rule.

use std::collections::HashSet;

use courtside_core::validation::NO_ARENAS;
use courtside_core::{Arena, DayOfWeek, EntityRules, Sport};
use courtside_validator::fields::format_phone_number;
use courtside_validator::validators::size_range;
use courtside_validator::{Validate, ValidationReport};
use serde::{Deserialize, Serialize};

use crate::payout::PayoutDetailsStep;

/// Shown when closing time does not follow opening time.
pub const CLOSING_BEFORE_OPENING: &str = "End time must be after start time";

/// Trimmed text, or `None` when blank.
fn filled(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|text| !text.is_empty()).map(str::to_owned)
}

// ============================================================================
// STEP 1: IDENTITY
// ============================================================================

/// `{name, email?}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityStep {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdentityStep {
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        let fields = rules.fields();
        let mut report = fields.validate_full_name(&self.name, true);
        report.merge(fields.validate_email(self.email.as_deref().unwrap_or_default()));
        report
    }

    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: filled(self.email.as_deref()),
        }
    }
}

// ============================================================================
// STEP 2: VENUE BASICS
// ============================================================================

/// Venue location, opening hours and contact numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueBasicsStep {
    pub venue_name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub pincode: String,
    #[serde(default)]
    pub description: Option<String>,
    /// URI of the uploaded cover photo.
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub operating_days: Vec<DayOfWeek>,
    pub opening_time: String,
    pub closing_time: String,
    pub contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

impl VenueBasicsStep {
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        let fields = rules.fields();
        let mut report = ValidationReport::valid();

        report.merge(fields.validate_venue_name(&self.venue_name));
        report.merge(fields.validate_address(&self.address));
        report.merge(fields.validate_city(self.city.as_deref().unwrap_or_default()));
        report.merge(fields.validate_state(self.state.as_deref().unwrap_or_default()));
        report.merge(fields.validate_pincode(&self.pincode, true));
        report.merge(fields.validate_description(self.description.as_deref().unwrap_or_default()));

        if self.cover_image.as_deref().is_none_or(|uri| uri.trim().is_empty()) {
            report.push("Please add a cover image for your venue");
        }

        if size_range::<DayOfWeek>(1, 7).validate(&self.operating_days).is_err() {
            report.push("Select between 1 and 7 operating days");
        }
        let distinct: HashSet<_> = self.operating_days.iter().collect();
        if distinct.len() != self.operating_days.len() {
            report.push("Operating days must not repeat");
        }

        let opening = rules.time_field(&mut report, "Opening time", &self.opening_time);
        let closing = rules.time_field(&mut report, "Closing time", &self.closing_time);
        if let (Some(opening), Some(closing)) = (opening, closing) {
            if closing <= opening {
                report.push(CLOSING_BEFORE_OPENING);
            }
        }

        report.merge_prefixed("Contact phone", fields.validate_phone_number(&self.contact_phone));
        if let Some(whatsapp) = self.whatsapp_number.as_deref() {
            if !whatsapp.trim().is_empty() {
                report.merge_prefixed("WhatsApp number", fields.validate_phone_number(whatsapp));
            }
        }

        report
    }

    /// Trimmed text with both phone numbers in `+91XXXXXXXXXX` form.
    pub fn normalized(&self) -> Self {
        Self {
            venue_name: self.venue_name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: filled(self.city.as_deref()),
            state: filled(self.state.as_deref()),
            pincode: self.pincode.trim().to_owned(),
            description: filled(self.description.as_deref()),
            cover_image: filled(self.cover_image.as_deref()),
            operating_days: self.operating_days.clone(),
            opening_time: self.opening_time.trim().to_owned(),
            closing_time: self.closing_time.trim().to_owned(),
            contact_phone: format_phone_number(&self.contact_phone),
            whatsapp_number: filled(self.whatsapp_number.as_deref())
                .map(|number| format_phone_number(&number)),
        }
    }
}

// ============================================================================
// STEP 3 (LEGACY): SPORTS AND PRICING
// ============================================================================

/// Single-sport setup used by the legacy flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportsPricingStep {
    /// A sport name from the closed vocabulary.
    pub sport: String,
    pub courts: u32,
    /// Minutes.
    pub slot_duration: u32,
    pub price_per_hour: f64,
}

impl SportsPricingStep {
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        let fields = rules.fields();
        let mut report = ValidationReport::valid();

        if self.sport.trim().is_empty() {
            report.push("Sport is required");
        } else if self.sport.parse::<Sport>().is_err() {
            let known: Vec<_> = Sport::ALL.iter().map(|s| s.as_str()).collect();
            report.push(format!("Sport must be one of: {}", known.join(", ")));
        }
        report.merge(fields.validate_courts(self.courts));
        report.merge(fields.validate_slot_duration(self.slot_duration));
        report.merge(fields.validate_price(self.price_per_hour));
        report
    }

    pub fn normalized(&self) -> Self {
        Self {
            sport: self.sport.trim().to_owned(),
            ..self.clone()
        }
    }
}

// ============================================================================
// STEP 3 (CURRENT): ARENA DEFINITIONS
// ============================================================================

/// Arenas with their weekly slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaDefinitionsStep {
    #[serde(default)]
    pub arenas: Vec<Arena>,
}

impl ArenaDefinitionsStep {
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        let mut report = ValidationReport::valid();
        if self.arenas.is_empty() {
            report.push(NO_ARENAS);
        }
        for (index, arena) in self.arenas.iter().enumerate() {
            report.merge_prefixed(&format!("Arena {}", index + 1), rules.validate_arena(arena));
        }
        report
    }

    pub fn normalized(&self) -> Self {
        Self {
            arenas: self.arenas.iter().cloned().map(Arena::normalized).collect(),
        }
    }
}

// ============================================================================
// STEP 4: AMENITIES AND RULES
// ============================================================================

/// `{amenities: string[], rules: string|null}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenitiesRulesStep {
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rules: Option<String>,
}

impl AmenitiesRulesStep {
    /// Both parts are optional; an empty submission passes.
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        let fields = rules.fields();
        let mut report = fields.validate_amenities(&self.amenities);
        report.merge(fields.validate_rules(self.rules.as_deref().unwrap_or_default()));
        report
    }

    pub fn normalized(&self) -> Self {
        Self {
            amenities: self.amenities.iter().filter_map(|amenity| filled(Some(amenity.as_str()))).collect(),
            rules: filled(self.rules.as_deref()),
        }
    }
}

// ============================================================================
// STEP KINDS
// ============================================================================

/// Identifies one screen of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Identity,
    VenueBasics,
    SportsPricing,
    Arenas,
    AmenitiesRules,
    PayoutDetails,
}

impl Step {
    pub const fn title(self) -> &'static str {
        match self {
            Step::Identity => "Your details",
            Step::VenueBasics => "Venue basics",
            Step::SportsPricing => "Sports and pricing",
            Step::Arenas => "Arenas and slots",
            Step::AmenitiesRules => "Amenities and rules",
            Step::PayoutDetails => "Payout details",
        }
    }

    /// Only identity may be submitted before a credential exists.
    pub const fn requires_credential(self) -> bool {
        !matches!(self, Step::Identity)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A step payload tagged with its step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "data", rename_all = "snake_case")]
pub enum StepPayload {
    Identity(IdentityStep),
    VenueBasics(VenueBasicsStep),
    SportsPricing(SportsPricingStep),
    Arenas(ArenaDefinitionsStep),
    AmenitiesRules(AmenitiesRulesStep),
    PayoutDetails(PayoutDetailsStep),
}

impl StepPayload {
    pub const fn step(&self) -> Step {
        match self {
            StepPayload::Identity(_) => Step::Identity,
            StepPayload::VenueBasics(_) => Step::VenueBasics,
            StepPayload::SportsPricing(_) => Step::SportsPricing,
            StepPayload::Arenas(_) => Step::Arenas,
            StepPayload::AmenitiesRules(_) => Step::AmenitiesRules,
            StepPayload::PayoutDetails(_) => Step::PayoutDetails,
        }
    }

    /// Runs the composite validator for this step.
    pub fn validate(&self, rules: &EntityRules) -> ValidationReport {
        match self {
            StepPayload::Identity(step) => step.validate(rules),
            StepPayload::VenueBasics(step) => step.validate(rules),
            StepPayload::SportsPricing(step) => step.validate(rules),
            StepPayload::Arenas(step) => step.validate(rules),
            StepPayload::AmenitiesRules(step) => step.validate(rules),
            StepPayload::PayoutDetails(step) => step.validate(rules.fields()),
        }
    }

    /// The payload with its values in the form the backend stores.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self {
            StepPayload::Identity(step) => StepPayload::Identity(step.normalized()),
            StepPayload::VenueBasics(step) => StepPayload::VenueBasics(step.normalized()),
            StepPayload::SportsPricing(step) => StepPayload::SportsPricing(step.normalized()),
            StepPayload::Arenas(step) => StepPayload::Arenas(step.normalized()),
            StepPayload::AmenitiesRules(step) => StepPayload::AmenitiesRules(step.normalized()),
            StepPayload::PayoutDetails(step) => StepPayload::PayoutDetails(step.normalized()),
        }
    }

    /// The JSON body sent to the backend for this step.
    pub fn body(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            StepPayload::Identity(step) => serde_json::to_value(step),
            StepPayload::VenueBasics(step) => serde_json::to_value(step),
            StepPayload::SportsPricing(step) => serde_json::to_value(step),
            StepPayload::Arenas(step) => serde_json::to_value(step),
            StepPayload::AmenitiesRules(step) => serde_json::to_value(step),
            StepPayload::PayoutDetails(step) => serde_json::to_value(step),
        }
    }
}
