//! `TimeSource` adapter backed by the compiled-in IANA database.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};
use worldclock_core::error::DomainError;
use worldclock_core::time_source::{CalendarSnapshot, TimeSource, TimeZoneId};

use crate::catalog::FALLBACK_TIME_ZONES;

/// en-US long date: weekday, abbreviated month, 2-digit day, year.
const DATE_LABEL_FORMAT: &str = "%A, %b %d, %Y";

/// Timezone conversion through `chrono-tz`.
#[derive(Debug, Clone, Default)]
pub struct TzdbTimeSource {
    enumeration_disabled: bool,
    local_hint: Option<String>,
}

impl TzdbTimeSource {
    /// Creates a source that enumerates the full database and reports `UTC`
    /// as the local zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables zone enumeration. With enumeration disabled,
    /// [`TimeSource::list_time_zones`] returns the fallback catalog.
    #[must_use]
    pub fn with_enumeration(mut self, enabled: bool) -> Self {
        self.enumeration_disabled = !enabled;
        self
    }

    /// Sets the local zone hint, in `TZ` environment variable syntax.
    #[must_use]
    pub fn with_local_hint(mut self, hint: impl Into<String>) -> Self {
        self.local_hint = Some(hint.into());
        self
    }

    fn parse_zone(zone: &TimeZoneId) -> Result<Tz, DomainError> {
        zone.as_str()
            .parse::<Tz>()
            .map_err(|_| DomainError::UnknownTimeZone(zone.as_str().to_owned()))
    }
}

impl TimeSource for TzdbTimeSource {
    fn resolve(
        &self,
        zone: &TimeZoneId,
        instant: DateTime<Utc>,
    ) -> Result<CalendarSnapshot, DomainError> {
        let tz = Self::parse_zone(zone)?;
        let local = instant.with_timezone(&tz);
        Ok(CalendarSnapshot {
            hour: local.hour(),
            minute: local.minute(),
            // Leap seconds are reported by chrono as second 59 with an
            // oversized fraction.
            second: local.second().min(59),
            millisecond: local.timestamp_subsec_millis().min(999),
            date_label: local.format(DATE_LABEL_FORMAT).to_string(),
        })
    }

    fn list_time_zones(&self) -> Vec<TimeZoneId> {
        let zones: Vec<TimeZoneId> = if self.enumeration_disabled {
            Vec::new()
        } else {
            TZ_VARIANTS
                .iter()
                .map(|tz| TimeZoneId::new(tz.name()))
                .collect()
        };
        if zones.is_empty() {
            tracing::debug!("zone enumeration unavailable, using fallback catalog");
            return FALLBACK_TIME_ZONES
                .iter()
                .copied()
                .map(TimeZoneId::from)
                .collect();
        }
        zones
    }

    fn local_time_zone(&self) -> TimeZoneId {
        let Some(hint) = self.local_hint.as_deref() else {
            return TimeZoneId::utc();
        };
        // POSIX allows a leading colon on file-based TZ values.
        let candidate = TimeZoneId::new(hint.trim().trim_start_matches(':'));
        match Self::parse_zone(&candidate) {
            Ok(_) => candidate,
            Err(err) => {
                tracing::debug!(hint, error = %err, "local zone hint not recognized, using UTC");
                TimeZoneId::utc()
            }
        }
    }
}
