//! Domain events for the Alarms context.

use serde::{Deserialize, Serialize};
use worldclock_core::event::{DomainEvent, EventMetadata};
use worldclock_core::notification::Alert;
use worldclock_core::tick::ClockTick;
use worldclock_core::time_source::TimeZoneId;

use super::alarm::{Alarm, AlarmId};

/// Event type identifier for [`AlarmFired`].
pub const ALARM_FIRED_EVENT_TYPE: &str = "alarms.alarm_fired";

/// Payload of an [`AlarmFired`] event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmFiredPayload {
    /// The alarm that fired.
    pub alarm_id: AlarmId,
    /// Zone the alarm was evaluated in.
    pub zone: TimeZoneId,
    /// Alarm time as entered.
    pub time: String,
}

/// Emitted when an alarm matches and is auto-disarmed.
#[derive(Debug, Clone)]
pub struct AlarmFired {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub payload: AlarmFiredPayload,
}

impl AlarmFired {
    /// Records `alarm` firing during `tick`.
    #[must_use]
    pub fn new(alarm: &Alarm, tick: &ClockTick) -> Self {
        Self {
            metadata: EventMetadata::new(ALARM_FIRED_EVENT_TYPE, tick.correlation_id, tick.instant),
            payload: AlarmFiredPayload {
                alarm_id: alarm.id,
                zone: alarm.zone.clone(),
                time: alarm.time.clone(),
            },
        }
    }

    /// The alert handed to the notification sink.
    #[must_use]
    pub fn alert(&self) -> Alert {
        Alert::new(
            self.payload.zone.clone(),
            self.payload.time.clone(),
            self.metadata.occurred_at,
        )
    }
}

impl DomainEvent for AlarmFired {
    fn event_type(&self) -> &'static str {
        ALARM_FIRED_EVENT_TYPE
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.payload).expect("AlarmFiredPayload serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
