//! Value types shared by the scheduling model.

use std::fmt;
use std::str::FromStr;

use courtside_validator::validators::time::minutes_since_midnight;
use serde::{Deserialize, Serialize};

// ============================================================================
// SPORT
// ============================================================================

/// The closed sport vocabulary an arena can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Cricket,
    Football,
    Badminton,
    Tennis,
    Basketball,
    Volleyball,
    Hockey,
    Squash,
}

impl Sport {
    /// Every sport, in display order.
    pub const ALL: [Sport; 8] = [
        Sport::Cricket,
        Sport::Football,
        Sport::Badminton,
        Sport::Tennis,
        Sport::Basketball,
        Sport::Volleyball,
        Sport::Hockey,
        Sport::Squash,
    ];

    /// Display name, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Sport::Cricket => "Cricket",
            Sport::Football => "Football",
            Sport::Badminton => "Badminton",
            Sport::Tennis => "Tennis",
            Sport::Basketball => "Basketball",
            Sport::Volleyball => "Volleyball",
            Sport::Hockey => "Hockey",
            Sport::Squash => "Squash",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known sport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sport `{0}`")]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSport(s.to_owned()))
    }
}

// ============================================================================
// DAY OF WEEK
// ============================================================================

/// Day of the week, numbered 0 (Sunday) through 6 (Saturday) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayOfWeek {
    /// Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// The wire number, 0..=6.
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned for day numbers outside 0..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("day of week must be 0-6 (0 = Sunday), got {0}")]
pub struct InvalidDay(pub u8);

impl TryFrom<u8> for DayOfWeek {
    type Error = InvalidDay;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(InvalidDay(value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.number()
    }
}

// ============================================================================
// TIME OF DAY
// ============================================================================

/// A wall-clock time with minute precision, `00:00` through `23:59`.
///
/// ```rust
/// use courtside_core::TimeOfDay;
///
/// let open: TimeOfDay = "06:30".parse().unwrap();
/// assert_eq!(open.minutes(), 390);
/// assert_eq!(open.to_string(), "06:30");
/// assert!("24:00".parse::<TimeOfDay>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Parses `HH:MM`; `None` when malformed or out of range.
    pub fn parse(input: &str) -> Option<Self> {
        minutes_since_midnight(input).map(|minutes| Self { minutes })
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.minutes
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

/// Returned for strings that are not a valid 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time `{0}`, expected HH:MM between 00:00 and 23:59")]
pub struct InvalidTime(pub String);

impl FromStr for TimeOfDay {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidTime(s.to_owned()))
    }
}
