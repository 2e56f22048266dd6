//! Commands for the Alarms context.

use uuid::Uuid;
use worldclock_core::command::Command;
use worldclock_core::time_source::TimeZoneId;

use super::alarm::AlarmId;

/// Command to add an armed alarm.
#[derive(Debug, Clone)]
pub struct AddAlarm {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Zone whose wall-clock time triggers the alarm.
    pub zone: TimeZoneId,
    /// Time of day, `HH:MM`.
    pub time: String,
}

impl Command for AddAlarm {
    fn command_type(&self) -> &'static str {
        "alarms.add_alarm"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to arm a disarmed alarm or disarm an armed one.
#[derive(Debug, Clone)]
pub struct ToggleAlarm {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The alarm to toggle.
    pub alarm_id: AlarmId,
}

impl Command for ToggleAlarm {
    fn command_type(&self) -> &'static str {
        "alarms.toggle_alarm"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to delete an alarm.
#[derive(Debug, Clone)]
pub struct RemoveAlarm {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The alarm to delete.
    pub alarm_id: AlarmId,
}

impl Command for RemoveAlarm {
    fn command_type(&self) -> &'static str {
        "alarms.remove_alarm"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
