//! Notification sink port.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DomainError;
use crate::time_source::TimeZoneId;

/// Alert delivered when an alarm fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Zone the alarm was set in.
    pub zone: TimeZoneId,
    /// Alarm time as entered, `HH:MM`.
    pub time: String,
    /// Human-readable alert text.
    pub message: String,
    /// Wall-clock instant of the tick that fired the alarm.
    pub fired_at: DateTime<Utc>,
}

impl Alert {
    /// Builds an alert with the standard message for `zone` and `time`.
    #[must_use]
    pub fn new(zone: TimeZoneId, time: impl Into<String>, fired_at: DateTime<Utc>) -> Self {
        let time = time.into();
        let message = format!("\u{23f0} Alarm for {zone} ({time})");
        Self {
            zone,
            time,
            message,
            fired_at,
        }
    }
}

/// Receives alerts and turns them into something audible or visible.
///
/// Implementations report delivery problems as
/// [`DomainError::NotificationSinkFailure`]; callers log and drop them.
pub trait NotificationSink: Send + Sync {
    /// Delivers one alert.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotificationSinkFailure` if delivery failed.
    fn notify(&self, alert: &Alert) -> Result<(), DomainError>;
}
