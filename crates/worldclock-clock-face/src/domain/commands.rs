//! Commands for the Clock Face context.

use uuid::Uuid;
use worldclock_core::command::Command;
use worldclock_core::time_source::TimeZoneId;

/// Command to display a specific zone.
#[derive(Debug, Clone)]
pub struct SetZone {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The zone to display.
    pub zone: TimeZoneId,
}

impl Command for SetZone {
    fn command_type(&self) -> &'static str {
        "clock_face.set_zone"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to display the zone best matching a search query.
#[derive(Debug, Clone)]
pub struct SelectZone {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// City or zone text typed by the user.
    pub query: String,
}

impl Command for SelectZone {
    fn command_type(&self) -> &'static str {
        "clock_face.select_zone"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to display the host's local zone.
#[derive(Debug, Clone)]
pub struct UseLocalZone {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for UseLocalZone {
    fn command_type(&self) -> &'static str {
        "clock_face.use_local_zone"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
