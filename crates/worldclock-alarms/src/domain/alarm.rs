//! Alarm entries and their time-of-day trigger.

use std::fmt;

use serde::{Deserialize, Serialize};
use worldclock_core::error::DomainError;
use worldclock_core::time_source::{CalendarSnapshot, TimeZoneId};

/// Registry-assigned alarm identifier. Strictly increasing per registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmId(pub u64);

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single-shot alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alarm {
    /// Alarm identifier.
    pub id: AlarmId,
    /// Zone whose wall-clock time triggers the alarm.
    pub zone: TimeZoneId,
    /// Time of day as entered, expected to be `HH:MM`. Not validated until
    /// evaluation.
    pub time: String,
    /// Whether the alarm is armed.
    pub active: bool,
}

/// Parsed `HH:MM` trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmTime {
    /// Hour, 0..=23.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
}

impl AlarmTime {
    /// Parses `H:MM` or `HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedAlarmTime` for anything else, including
    /// out-of-range fields.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedAlarmTime(raw.to_owned());
        let (hour, minute) = raw.trim().split_once(':').ok_or_else(malformed)?;
        let well_formed = matches!(hour.len(), 1 | 2)
            && minute.len() == 2
            && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(malformed());
        }
        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;
        if hour > 23 || minute > 59 {
            return Err(malformed());
        }
        Ok(Self { hour, minute })
    }

    /// True only during the first second of the trigger minute.
    #[must_use]
    pub fn matches(&self, now: &CalendarSnapshot) -> bool {
        now.hour == self.hour && now.minute == self.minute && now.second == 0
    }
}
