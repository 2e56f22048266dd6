//! Test time source — a `TimeSource` whose answers are set by the test.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use worldclock_core::error::DomainError;
use worldclock_core::time_source::{CalendarSnapshot, TimeSource, TimeZoneId};

/// Builds a snapshot with a fixed date label and zero milliseconds.
#[must_use]
pub fn snapshot(hour: u32, minute: u32, second: u32) -> CalendarSnapshot {
    CalendarSnapshot {
        hour,
        minute,
        second,
        millisecond: 0,
        date_label: "Thursday, Jan 15, 2026".to_owned(),
    }
}

/// A time source that ignores the instant and answers every `resolve` with
/// the snapshot configured for the zone. Unconfigured zones are unknown.
#[derive(Debug, Default)]
pub struct FixedTimeSource {
    zones: Mutex<BTreeMap<TimeZoneId, CalendarSnapshot>>,
    local: Option<TimeZoneId>,
}

impl FixedTimeSource {
    /// Creates a source that knows no zones.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the snapshot returned for `zone`.
    #[must_use]
    pub fn with_zone(self, zone: &str, snapshot: CalendarSnapshot) -> Self {
        self.set(zone, snapshot);
        self
    }

    /// Sets the zone reported by `local_time_zone`.
    #[must_use]
    pub fn with_local(mut self, zone: &str) -> Self {
        self.local = Some(TimeZoneId::new(zone));
        self
    }

    /// Replaces the snapshot for `zone` on a shared source.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set(&self, zone: &str, snapshot: CalendarSnapshot) {
        self.zones
            .lock()
            .unwrap()
            .insert(TimeZoneId::new(zone), snapshot);
    }
}

impl TimeSource for FixedTimeSource {
    fn resolve(
        &self,
        zone: &TimeZoneId,
        _instant: DateTime<Utc>,
    ) -> Result<CalendarSnapshot, DomainError> {
        self.zones
            .lock()
            .unwrap()
            .get(zone)
            .cloned()
            .ok_or_else(|| DomainError::UnknownTimeZone(zone.as_str().to_owned()))
    }

    fn list_time_zones(&self) -> Vec<TimeZoneId> {
        let zones: Vec<TimeZoneId> = self.zones.lock().unwrap().keys().cloned().collect();
        if zones.is_empty() {
            vec![TimeZoneId::utc()]
        } else {
            zones
        }
    }

    fn local_time_zone(&self) -> TimeZoneId {
        self.local.clone().unwrap_or_else(TimeZoneId::utc)
    }
}
