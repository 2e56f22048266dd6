//! Timezone conversion port and its value types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Zone shown when nothing better is known.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Identifier naming a timezone per IANA convention, e.g. `Asia/Kolkata`.
///
/// Construction does not validate; a value is only known to be usable once
/// a [`TimeSource`] has resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `UTC` zone.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(DEFAULT_TIME_ZONE)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Calendar decomposition of an instant in a particular zone.
///
/// Recomputed on every tick and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarSnapshot {
    /// Hour of day, 0..=23.
    pub hour: u32,
    /// Minute, 0..=59.
    pub minute: u32,
    /// Second, 0..=59.
    pub second: u32,
    /// Millisecond, 0..=999.
    pub millisecond: u32,
    /// Long-form date, e.g. `Thursday, Jan 15, 2026`.
    pub date_label: String,
}

impl CalendarSnapshot {
    /// Formats the time of day as zero-padded `HH:MM:SS`.
    #[must_use]
    pub fn digital(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Localization/time service consumed by the clock and alarm contexts.
pub trait TimeSource: Send + Sync {
    /// Converts `instant` into calendar fields for `zone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTimeZone` if `zone` is not recognized.
    fn resolve(
        &self,
        zone: &TimeZoneId,
        instant: DateTime<Utc>,
    ) -> Result<CalendarSnapshot, DomainError>;

    /// Lists known zones in display order. Never empty.
    fn list_time_zones(&self) -> Vec<TimeZoneId>;

    /// Best-effort local zone; `UTC` when it cannot be determined.
    fn local_time_zone(&self) -> TimeZoneId;
}
