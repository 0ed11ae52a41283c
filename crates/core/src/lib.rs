//! # Courtside Core
//!
//! The venue scheduling model: venues own arenas, arenas own recurring
//! weekly slots.
//!
//! ## Key Components
//!
//! - **Identifiers**: [`VenueId`], [`ArenaId`], [`SlotId`]
//! - **Value types**: [`Sport`], [`DayOfWeek`], [`TimeOfDay`]
//! - **Entities**: [`Venue`], [`Arena`], [`Slot`]
//! - **Store**: [`ArenaStore`], id-keyed editing of arenas and their slots
//! - **Validation**: [`validate_slot`], [`validate_arena`], [`validate_venue`]
//! - **Scheduling**: [`find_overlaps`] and the opt-in [`SchedulePolicy`]
//!
//! ## Usage
//!
//! ```rust
//! use courtside_core::{Arena, ArenaStore, DayOfWeek, Sport, validate_arena};
//!
//! let mut store = ArenaStore::new();
//! let court = store.add_arena(Arena::new("Court 1", Sport::Badminton, 2, 500.0));
//! store.add_default_slot(court, DayOfWeek::Saturday, "06:00", "07:00").unwrap();
//!
//! let report = validate_arena(store.arena(court).unwrap());
//! assert!(report.is_valid);
//! ```

pub mod id;
pub mod model;
pub mod schedule;
pub mod store;
pub mod types;
pub mod validation;

pub use id::{ArenaId, SlotId, VenueId};
pub use model::{Arena, Slot, Venue};
pub use schedule::{SchedulePolicy, SlotOverlap, find_overlaps};
pub use store::{ArenaStore, StoreError};
pub use types::{DayOfWeek, InvalidDay, InvalidTime, Sport, TimeOfDay, UnknownSport};
pub use validation::{EntityRules, validate_arena, validate_slot, validate_venue};

/// Common imports for callers of the scheduling model.
pub mod prelude {
    pub use super::{
        Arena, ArenaId, ArenaStore, DayOfWeek, EntityRules, SchedulePolicy, Slot, SlotId, Sport,
        StoreError, TimeOfDay, Venue, VenueId, validate_arena, validate_slot, validate_venue,
    };
    pub use courtside_validator::ValidationReport;
}
