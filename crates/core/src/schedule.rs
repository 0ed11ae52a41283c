//! Cross-slot scheduling checks and their policy switch.

use courtside_validator::ConfigError;
use courtside_validator::config::apply_env_overrides;
use serde::{Deserialize, Serialize};

use crate::id::SlotId;
use crate::model::Slot;
use crate::types::DayOfWeek;

/// Environment prefix for [`SchedulePolicy::from_env`].
pub const ENV_PREFIX: &str = "COURTSIDE_SCHEDULE_";

/// Scheduling rules applied on top of per-slot validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulePolicy {
    /// Reject arenas whose slots overlap on the same day.
    pub reject_overlapping_slots: bool,
}

impl SchedulePolicy {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overlaid with `COURTSIDE_SCHEDULE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        apply_env_overrides(Self::default(), ENV_PREFIX, vars)
    }
}

// ============================================================================
// OVERLAPS
// ============================================================================

/// Two slots on the same day whose windows intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOverlap {
    pub day: DayOfWeek,
    /// Position of the earlier slot in the input.
    pub first: usize,
    pub second: usize,
    pub first_id: SlotId,
    pub second_id: SlotId,
}

/// Finds every pair of same-day slots with intersecting windows.
///
/// Windows are half-open, so `06:00-07:00` and `07:00-08:00` do not overlap.
/// Slots with malformed or unordered times are skipped; per-slot validation
/// reports those.
///
/// ```rust
/// use courtside_core::{DayOfWeek, Slot, find_overlaps};
///
/// let slots = [
///     Slot::new(DayOfWeek::Monday, "06:00", "08:00", 1, 500.0),
///     Slot::new(DayOfWeek::Monday, "07:00", "09:00", 1, 500.0),
///     Slot::new(DayOfWeek::Monday, "09:00", "10:00", 1, 500.0),
///     Slot::new(DayOfWeek::Tuesday, "07:00", "09:00", 1, 500.0),
/// ];
/// let overlaps = find_overlaps(&slots);
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!((overlaps[0].first, overlaps[0].second), (0, 1));
/// ```
pub fn find_overlaps(slots: &[Slot]) -> Vec<SlotOverlap> {
    let windows: Vec<_> = slots
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            let (start, end) = slot.window()?;
            (start < end).then_some((index, slot, start, end))
        })
        .collect();

    let mut overlaps = Vec::new();
    for (i, &(a_index, a, a_start, a_end)) in windows.iter().enumerate() {
        for &(b_index, b, b_start, b_end) in &windows[i + 1..] {
            if a.day_of_week == b.day_of_week && a_start < b_end && b_start < a_end {
                overlaps.push(SlotOverlap {
                    day: a.day_of_week,
                    first: a_index,
                    second: b_index,
                    first_id: a.id,
                    second_id: b.id,
                });
            }
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn slot(start: &str, end: &str) -> Slot {
        Slot::new(DayOfWeek::Wednesday, start, end, 1, 500.0)
    }

    #[rstest]
    #[case("06:00", "07:00", "07:00", "08:00", false)]
    #[case("06:00", "07:30", "07:00", "08:00", true)]
    #[case("06:00", "10:00", "07:00", "08:00", true)]
    #[case("07:00", "08:00", "07:00", "08:00", true)]
    #[case("09:00", "10:00", "07:00", "08:00", false)]
    fn half_open_windows(
        #[case] a_start: &str,
        #[case] a_end: &str,
        #[case] b_start: &str,
        #[case] b_end: &str,
        #[case] overlapping: bool,
    ) {
        let slots = [slot(a_start, a_end), slot(b_start, b_end)];
        assert_eq!(!find_overlaps(&slots).is_empty(), overlapping);
    }

    #[test]
    fn malformed_slots_are_skipped() {
        let slots = [slot("06:00", "08:00"), slot("bad", "07:00"), slot("08:00", "06:00")];
        assert!(find_overlaps(&slots).is_empty());
    }

    #[test]
    fn policy_from_env() {
        let policy = SchedulePolicy::from_vars([(
            "COURTSIDE_SCHEDULE_REJECT_OVERLAPPING_SLOTS".to_string(),
            "true".to_string(),
        )])
        .unwrap();
        assert!(policy.reject_overlapping_slots);
        assert!(!SchedulePolicy::default().reject_overlapping_slots);
    }

    #[test]
    fn policy_from_json() {
        let policy = SchedulePolicy::from_json_str(r#"{ "reject_overlapping_slots": true }"#).unwrap();
        assert!(policy.reject_overlapping_slots);
        assert!(SchedulePolicy::from_json_str(r#"{ "reject": true }"#).is_err());
    }
}
