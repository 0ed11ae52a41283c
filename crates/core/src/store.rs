//! Id-keyed arena and slot store.
//!
//! Editing screens hold one [`ArenaStore`] per venue draft. Every update
//! addresses its target by id and replaces it whole, so removing one entry
//! never shifts which entry another edit lands on.

use indexmap::IndexMap;

use crate::id::{ArenaId, SlotId};
use crate::model::{Arena, Slot};
use crate::types::DayOfWeek;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("arena {0} not found")]
    ArenaNotFound(ArenaId),

    #[error("slot {slot} not found in arena {arena}")]
    SlotNotFound { arena: ArenaId, slot: SlotId },

    /// An arena must keep at least one slot.
    #[error("arena {0} must keep at least one slot")]
    LastSlot(ArenaId),
}

/// Arenas in insertion order, addressed by [`ArenaId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArenaStore {
    arenas: IndexMap<ArenaId, Arena>,
}

impl ArenaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads arenas, keyed by their current ids.
    pub fn from_arenas(arenas: impl IntoIterator<Item = Arena>) -> Self {
        Self {
            arenas: arenas.into_iter().map(|arena| (arena.id, arena)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.arenas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arenas.is_empty()
    }

    pub fn arena(&self, id: ArenaId) -> Option<&Arena> {
        self.arenas.get(&id)
    }

    pub fn arenas(&self) -> impl Iterator<Item = &Arena> {
        self.arenas.values()
    }

    /// Arenas in insertion order, ready for the creation payload.
    pub fn into_arenas(self) -> Vec<Arena> {
        self.arenas.into_values().collect()
    }

    // ── Arenas ──────────────────────────────────────────────────────────

    pub fn add_arena(&mut self, arena: Arena) -> ArenaId {
        let id = arena.id;
        self.arenas.insert(id, arena);
        tracing::trace!(arena = %id, "arena added");
        id
    }

    /// Replaces an arena wholesale. The replacement takes over `id`.
    ///
    /// An arena that has slots cannot be replaced by one with none.
    pub fn replace_arena(&mut self, id: ArenaId, mut arena: Arena) -> Result<(), StoreError> {
        let entry = self.arenas.get_mut(&id).ok_or(StoreError::ArenaNotFound(id))?;
        if !entry.slots.is_empty() && arena.slots.is_empty() {
            return Err(StoreError::LastSlot(id));
        }
        arena.id = id;
        *entry = arena;
        Ok(())
    }

    /// Removes an arena, keeping the order of the rest.
    pub fn remove_arena(&mut self, id: ArenaId) -> Result<Arena, StoreError> {
        self.arenas
            .shift_remove(&id)
            .ok_or(StoreError::ArenaNotFound(id))
    }

    // ── Slots ───────────────────────────────────────────────────────────

    fn arena_mut(&mut self, id: ArenaId) -> Result<&mut Arena, StoreError> {
        self.arenas.get_mut(&id).ok_or(StoreError::ArenaNotFound(id))
    }

    pub fn add_slot(&mut self, arena: ArenaId, slot: Slot) -> Result<SlotId, StoreError> {
        Ok(self.arena_mut(arena)?.push_slot(slot))
    }

    /// Adds a slot seeded with the arena's base price and capacity.
    pub fn add_default_slot(
        &mut self,
        arena: ArenaId,
        day_of_week: DayOfWeek,
        start_time: &str,
        end_time: &str,
    ) -> Result<SlotId, StoreError> {
        let target = self.arena_mut(arena)?;
        let slot = Slot::from_arena_defaults(target, day_of_week, start_time, end_time);
        Ok(target.push_slot(slot))
    }

    /// Replaces one slot. The replacement takes over `slot_id`.
    pub fn update_slot(
        &mut self,
        arena: ArenaId,
        slot_id: SlotId,
        mut slot: Slot,
    ) -> Result<(), StoreError> {
        let target = self.arena_mut(arena)?;
        let position = target.slot_position(slot_id).ok_or(StoreError::SlotNotFound {
            arena,
            slot: slot_id,
        })?;
        slot.id = slot_id;
        target.slots[position] = slot;
        Ok(())
    }

    /// Removes a slot. Removing an arena's only slot is rejected.
    pub fn remove_slot(&mut self, arena: ArenaId, slot_id: SlotId) -> Result<Slot, StoreError> {
        let target = self.arena_mut(arena)?;
        let position = target.slot_position(slot_id).ok_or(StoreError::SlotNotFound {
            arena,
            slot: slot_id,
        })?;
        if target.slots.len() == 1 {
            return Err(StoreError::LastSlot(arena));
        }
        Ok(target.slots.remove(position))
    }
}
