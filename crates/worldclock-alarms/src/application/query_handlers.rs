//! Query handlers for the Alarms context.
//!
//! Read-only view DTOs for presentation layers.

use serde::Serialize;
use worldclock_core::time_source::TimeZoneId;

use crate::application::registry::AlarmRegistry;
use crate::domain::alarm::{Alarm, AlarmId};

/// Placeholder text shown for an empty alarm list.
pub const NO_ALARMS_MESSAGE: &str = "No alarms";

/// Read-only view of one alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlarmView {
    /// The alarm identifier.
    pub id: AlarmId,
    /// Time as entered.
    pub time: String,
    /// Zone the alarm is set in.
    pub zone: TimeZoneId,
    /// Whether the alarm is armed.
    pub active: bool,
    /// Toggle button label, `On` or `Off`.
    pub state: &'static str,
}

impl From<&Alarm> for AlarmView {
    fn from(alarm: &Alarm) -> Self {
        Self {
            id: alarm.id,
            time: alarm.time.clone(),
            zone: alarm.zone.clone(),
            active: alarm.active,
            state: if alarm.active { "On" } else { "Off" },
        }
    }
}

/// Read-only view of the alarm list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlarmListView {
    /// Alarms in creation order.
    pub alarms: Vec<AlarmView>,
    /// Set only when there are no alarms.
    pub empty_message: Option<&'static str>,
}

/// Lists all alarms.
#[must_use]
pub fn list_alarms(registry: &AlarmRegistry) -> AlarmListView {
    let alarms: Vec<AlarmView> = registry.list().iter().map(AlarmView::from).collect();
    let empty_message = alarms.is_empty().then_some(NO_ALARMS_MESSAGE);
    AlarmListView {
        alarms,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use worldclock_core::time_source::TimeZoneId;
    use worldclock_test_support::{FixedTimeSource, RecordingNotificationSink};

    use super::*;

    #[test]
    fn test_list_alarms_reports_empty_list() {
        let registry = AlarmRegistry::new(
            Arc::new(FixedTimeSource::new()),
            Arc::new(RecordingNotificationSink::new()),
        );

        let view = list_alarms(&registry);

        assert!(view.alarms.is_empty());
        assert_eq!(view.empty_message, Some("No alarms"));
    }

    #[test]
    fn test_list_alarms_labels_state() {
        // Arrange
        let mut registry = AlarmRegistry::new(
            Arc::new(FixedTimeSource::new()),
            Arc::new(RecordingNotificationSink::new()),
        );
        let first = registry.add(TimeZoneId::utc(), "06:00");
        registry.add(TimeZoneId::new("Asia/Tokyo"), "21:15");
        registry.toggle(first.id);

        // Act
        let view = list_alarms(&registry);

        // Assert
        assert_eq!(view.empty_message, None);
        assert_eq!(view.alarms.len(), 2);
        assert_eq!(view.alarms[0].state, "Off");
        assert_eq!(view.alarms[1].state, "On");
        assert_eq!(view.alarms[1].zone, TimeZoneId::new("Asia/Tokyo"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["alarms"][1]["time"], "21:15");
        assert_eq!(json["alarms"][1]["id"], 2);
    }
}
