//! Venue, arena and slot entities.
//!
//! Field names and shapes follow the venue creation payload, so a [`Venue`]
//! serializes directly into the request body. Times stay as the raw strings
//! the operator entered; the entity validators report malformed values
//! instead of failing deserialization.
//!
//! Identifiers are client-side only and skipped by serde; a parsed payload
//! receives fresh ids.

use courtside_validator::fields::format_phone_number;
use serde::{Deserialize, Serialize};

use crate::id::{ArenaId, SlotId, VenueId};
use crate::types::{DayOfWeek, Sport, TimeOfDay};

const fn active() -> bool {
    true
}

/// Trimmed text, or `None` when blank.
fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

// ============================================================================
// SLOT
// ============================================================================

/// A recurring weekly availability window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(skip)]
    pub id: SlotId,
    pub day_of_week: DayOfWeek,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    /// `HH:MM`, 24-hour; must be after `start_time` on the same day.
    pub end_time: String,
    /// Simultaneous bookings, at most the arena capacity.
    pub capacity: u32,
    pub price_per_hour: f64,
    /// Informational only; never changes the price.
    #[serde(default)]
    pub is_peak_hour: bool,
}

impl Slot {
    /// Creates an off-peak slot.
    pub fn new(
        day_of_week: DayOfWeek,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        capacity: u32,
        price_per_hour: f64,
    ) -> Self {
        Self {
            id: SlotId::new(),
            day_of_week,
            start_time: start_time.into(),
            end_time: end_time.into(),
            capacity,
            price_per_hour,
            is_peak_hour: false,
        }
    }

    /// A slot seeded with the arena's base price and full capacity.
    ///
    /// ```rust
    /// use courtside_core::{Arena, DayOfWeek, Slot, Sport};
    ///
    /// let arena = Arena::new("Centre Court", Sport::Badminton, 4, 600.0);
    /// let slot = Slot::from_arena_defaults(&arena, DayOfWeek::Monday, "06:00", "07:00")
    ///     .with_price(800.0);
    /// assert_eq!(slot.capacity, 4);
    /// assert_eq!(slot.price_per_hour, 800.0);
    /// ```
    pub fn from_arena_defaults(
        arena: &Arena,
        day_of_week: DayOfWeek,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self::new(
            day_of_week,
            start_time,
            end_time,
            arena.capacity,
            arena.base_price_per_hour,
        )
    }

    #[must_use]
    pub fn with_price(mut self, price_per_hour: f64) -> Self {
        self.price_per_hour = price_per_hour;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn peak(mut self, is_peak_hour: bool) -> Self {
        self.is_peak_hour = is_peak_hour;
        self
    }

    /// Parsed `[start, end)` window, if both times are well-formed.
    pub fn window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        Some((
            TimeOfDay::parse(&self.start_time)?,
            TimeOfDay::parse(&self.end_time)?,
        ))
    }

    /// Window length in minutes, when the window is well-formed and ordered.
    pub fn duration_minutes(&self) -> Option<u16> {
        let (start, end) = self.window()?;
        end.minutes().checked_sub(start.minutes()).filter(|d| *d > 0)
    }
}

// ============================================================================
// ARENA
// ============================================================================

/// A single-sport bookable unit within a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    #[serde(skip)]
    pub id: ArenaId,
    pub name: String,
    pub sport: Sport,
    /// Number of courts or fields that can be booked at once.
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub base_price_per_hour: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl Arena {
    /// An active arena with no slots yet.
    pub fn new(name: impl Into<String>, sport: Sport, capacity: u32, base_price_per_hour: f64) -> Self {
        Self {
            id: ArenaId::new(),
            name: name.into(),
            sport,
            capacity,
            description: None,
            amenities: Vec::new(),
            base_price_per_hour,
            images: Vec::new(),
            slots: Vec::new(),
            is_active: true,
        }
    }

    /// Appends a slot, returning its id.
    pub fn push_slot(&mut self, slot: Slot) -> SlotId {
        let id = slot.id;
        self.slots.push(slot);
        id
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// The arena as sent: trimmed name, blank description dropped.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.description = filled(self.description);
        self
    }

    pub(crate) fn slot_position(&self, id: SlotId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }
}

// ============================================================================
// VENUE
// ============================================================================

/// A physical location owned by an operator.
///
/// Venues are never deleted; set `is_active` to `false` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(skip)]
    pub id: VenueId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub pincode: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub base_price_per_hour: f64,
    pub contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
    #[serde(default)]
    pub arenas: Vec<Arena>,
}

impl Venue {
    /// An active venue with the mandatory fields set and no arenas.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        pincode: impl Into<String>,
        contact_phone: impl Into<String>,
        base_price_per_hour: f64,
    ) -> Self {
        Self {
            id: VenueId::new(),
            name: name.into(),
            address: address.into(),
            city: None,
            state: None,
            pincode: pincode.into(),
            description: None,
            amenities: Vec::new(),
            base_price_per_hour,
            contact_phone: contact_phone.into(),
            whatsapp_number: None,
            images: Vec::new(),
            rules: None,
            is_active: true,
            arenas: Vec::new(),
        }
    }

    /// The venue as sent in the creation payload.
    ///
    /// Text is trimmed and blank optionals become `null`. Phone numbers are
    /// put in `+91XXXXXXXXXX` form when they can be normalized.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.address = self.address.trim().to_owned();
        self.city = filled(self.city);
        self.state = filled(self.state);
        self.pincode = self.pincode.trim().to_owned();
        self.description = filled(self.description);
        self.contact_phone = format_phone_number(&self.contact_phone);
        self.whatsapp_number = filled(self.whatsapp_number).map(|number| format_phone_number(&number));
        self.rules = filled(self.rules);
        self.arenas = self.arenas.into_iter().map(Arena::normalized).collect();
        self
    }

    /// Soft-deletes the venue.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_slot_copies_arena_values() {
        let arena = Arena::new("Turf A", Sport::Football, 2, 1500.0);
        let slot = Slot::from_arena_defaults(&arena, DayOfWeek::Friday, "18:00", "19:00");
        assert_eq!(slot.capacity, 2);
        assert_eq!(slot.price_per_hour, 1500.0);
        assert!(!slot.is_peak_hour);

        let peak = slot.with_capacity(1).peak(true);
        assert_eq!(peak.capacity, 1);
        assert_eq!(peak.price_per_hour, 1500.0);
    }

    #[test]
    fn slot_window_and_duration() {
        let slot = Slot::new(DayOfWeek::Monday, "06:00", "07:30", 1, 500.0);
        assert_eq!(slot.duration_minutes(), Some(90));

        let backwards = Slot::new(DayOfWeek::Monday, "18:00", "17:00", 1, 500.0);
        assert!(backwards.window().is_some());
        assert_eq!(backwards.duration_minutes(), None);
    }

    #[test]
    fn slot_payload_shape() {
        let slot = Slot::new(DayOfWeek::Sunday, "06:00", "07:00", 2, 800.0).peak(true);
        assert_eq!(
            serde_json::to_value(&slot).unwrap(),
            serde_json::json!({
                "day_of_week": 0,
                "start_time": "06:00",
                "end_time": "07:00",
                "capacity": 2,
                "price_per_hour": 800.0,
                "is_peak_hour": true,
            })
        );
    }

    #[test]
    fn arena_defaults_when_parsing() {
        let arena: Arena = serde_json::from_value(serde_json::json!({
            "name": "Court 1",
            "sport": "Tennis",
            "capacity": 1,
            "base_price_per_hour": 400.0,
        }))
        .unwrap();
        assert!(arena.is_active);
        assert!(arena.slots.is_empty());
    }

    #[test]
    fn creation_payload_carries_normalized_phones() {
        let mut venue = Venue::new(" Ace Arena ", "12 MG Road, Bengaluru", "560001", "098765-43210", 800.0);
        venue.whatsapp_number = Some("  ".into());
        venue.city = Some(" Bengaluru ".into());
        venue.arenas.push(Arena::new(" Court 1 ", Sport::Badminton, 1, 400.0));

        let body = serde_json::to_value(venue.normalized()).unwrap();
        assert_eq!(body["name"], "Ace Arena");
        assert_eq!(body["contact_phone"], "+919876543210");
        assert_eq!(body["city"], "Bengaluru");
        assert!(body.get("whatsapp_number").is_none());
        assert_eq!(body["arenas"][0]["name"], "Court 1");
    }

    #[test]
    fn unparseable_phone_is_sent_trimmed() {
        let venue = Venue::new("Ace Arena", "12 MG Road", "560001", " 12345 ", 800.0).normalized();
        assert_eq!(venue.contact_phone, "12345");
    }

    #[test]
    fn deactivate_is_soft() {
        let mut venue = Venue::new("Ace Arena", "12 MG Road, Bengaluru", "560001", "+919876543210", 800.0);
        venue.deactivate();
        assert!(!venue.is_active);
    }
}
