//! Entity-level composite validators for slots, arenas and venues.
//!
//! Composite validators never stop at the first failure: every violated
//! rule contributes a message. Nested messages are prefixed with their
//! position ("Arena 2: Slot 1: End time must be after start time").

use std::sync::LazyLock;

use courtside_validator::{FieldRules, ValidationReport};

use crate::model::{Arena, Slot, Venue};
use crate::schedule::{SchedulePolicy, find_overlaps};
use crate::types::TimeOfDay;

/// Shown when an arena has no slots.
pub const NO_SLOTS: &str = "At least one time slot is required";
/// Shown when a venue has no arenas.
pub const NO_ARENAS: &str = "At least one arena is required";
/// Shown when a window does not run forward.
pub const END_BEFORE_START: &str = "End time must be after start time";

static DEFAULT_ENTITY_RULES: LazyLock<EntityRules> = LazyLock::new(EntityRules::default);

/// Field rules plus scheduling policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityRules {
    fields: FieldRules,
    policy: SchedulePolicy,
}

impl EntityRules {
    pub fn new(fields: FieldRules, policy: SchedulePolicy) -> Self {
        Self { fields, policy }
    }

    pub fn fields(&self) -> &FieldRules {
        &self.fields
    }

    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }

    /// Checks one slot against its arena's capacity.
    pub fn validate_slot(&self, slot: &Slot, arena_capacity: u32) -> ValidationReport {
        let mut report = ValidationReport::valid();

        let start = self.time_field(&mut report, "Start time", &slot.start_time);
        let end = self.time_field(&mut report, "End time", &slot.end_time);
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                report.push(END_BEFORE_START);
            }
        }

        if slot.capacity == 0 {
            report.push("Slot capacity must be at least 1");
        } else if slot.capacity > arena_capacity {
            report.push(format!(
                "Slot capacity cannot exceed arena capacity of {arena_capacity}"
            ));
        }

        report.merge(self.fields.validate_price(slot.price_per_hour));
        report
    }

    /// Parses a required `HH:MM` field, reporting a blank or malformed value
    /// under `label`.
    pub fn time_field(
        &self,
        report: &mut ValidationReport,
        label: &str,
        value: &str,
    ) -> Option<TimeOfDay> {
        if value.trim().is_empty() {
            report.push(format!("{label} is required"));
            return None;
        }
        let check = self.fields.validate_time(value);
        if check.is_valid {
            TimeOfDay::parse(value)
        } else {
            report.merge_prefixed(label, check);
            None
        }
    }

    /// Checks an arena and every one of its slots.
    pub fn validate_arena(&self, arena: &Arena) -> ValidationReport {
        let fields = &self.fields;
        let mut report = ValidationReport::valid();

        report.merge(fields.validate_arena_name(&arena.name));
        report.merge(fields.validate_courts(arena.capacity));
        report.merge_prefixed("Base price", fields.validate_price(arena.base_price_per_hour));
        report.merge(fields.validate_description(arena.description.as_deref().unwrap_or_default()));
        report.merge(fields.validate_amenities(&arena.amenities));
        report.merge(fields.validate_images(&arena.images));

        if arena.slots.is_empty() {
            report.push(NO_SLOTS);
        }
        for (index, slot) in arena.slots.iter().enumerate() {
            report.merge_prefixed(
                &format!("Slot {}", index + 1),
                self.validate_slot(slot, arena.capacity),
            );
        }

        if self.policy.reject_overlapping_slots {
            for overlap in find_overlaps(&arena.slots) {
                report.push(format!(
                    "Slot {} and Slot {} overlap on {}",
                    overlap.first + 1,
                    overlap.second + 1,
                    overlap.day
                ));
            }
        }

        if !report.is_valid {
            tracing::debug!(
                arena = %arena.id,
                errors = report.errors.len(),
                "arena rejected"
            );
        }
        report
    }

    /// Checks a venue, its arenas and their slots.
    pub fn validate_venue(&self, venue: &Venue) -> ValidationReport {
        let fields = &self.fields;
        let mut report = ValidationReport::valid();

        report.merge(fields.validate_venue_name(&venue.name));
        report.merge(fields.validate_address(&venue.address));
        report.merge(fields.validate_city(venue.city.as_deref().unwrap_or_default()));
        report.merge(fields.validate_state(venue.state.as_deref().unwrap_or_default()));
        report.merge(fields.validate_pincode(&venue.pincode, true));
        report.merge(fields.validate_description(venue.description.as_deref().unwrap_or_default()));
        report.merge(fields.validate_amenities(&venue.amenities));
        report.merge_prefixed("Base price", fields.validate_price(venue.base_price_per_hour));
        report.merge_prefixed("Contact phone", fields.validate_phone_number(&venue.contact_phone));
        if let Some(whatsapp) = venue.whatsapp_number.as_deref() {
            if !whatsapp.trim().is_empty() {
                report.merge_prefixed("WhatsApp number", fields.validate_phone_number(whatsapp));
            }
        }
        report.merge(fields.validate_images(&venue.images));
        report.merge(fields.validate_rules(venue.rules.as_deref().unwrap_or_default()));

        if venue.arenas.is_empty() {
            report.push(NO_ARENAS);
        }
        for (index, arena) in venue.arenas.iter().enumerate() {
            report.merge_prefixed(&format!("Arena {}", index + 1), self.validate_arena(arena));
        }

        if !report.is_valid {
            tracing::debug!(
                venue = %venue.id,
                errors = report.errors.len(),
                "venue rejected"
            );
        }
        report
    }
}

/// [`EntityRules::validate_slot`] with default rules.
pub fn validate_slot(slot: &Slot, arena_capacity: u32) -> ValidationReport {
    DEFAULT_ENTITY_RULES.validate_slot(slot, arena_capacity)
}

/// [`EntityRules::validate_arena`] with default rules.
pub fn validate_arena(arena: &Arena) -> ValidationReport {
    DEFAULT_ENTITY_RULES.validate_arena(arena)
}

/// [`EntityRules::validate_venue`] with default rules.
pub fn validate_venue(venue: &Venue) -> ValidationReport {
    DEFAULT_ENTITY_RULES.validate_venue(venue)
}
