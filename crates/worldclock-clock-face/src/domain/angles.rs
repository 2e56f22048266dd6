//! Analog hand angles.

use serde::Serialize;
use worldclock_core::time_source::CalendarSnapshot;

/// Hand rotations in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    /// 30° per hour on a 12-hour dial.
    pub hour: f64,
    /// 6° per minute.
    pub minute: f64,
    /// 6° per second.
    pub second: f64,
}

impl HandAngles {
    /// Computes angles from `snapshot`. The millisecond fraction carries
    /// through to every hand so all three sweep between ticks.
    #[must_use]
    pub fn from_snapshot(snapshot: &CalendarSnapshot) -> Self {
        let seconds = f64::from(snapshot.second) + f64::from(snapshot.millisecond) / 1000.0;
        let minutes = f64::from(snapshot.minute) + seconds / 60.0;
        let hours = f64::from(snapshot.hour % 12) + minutes / 60.0;
        Self {
            hour: hours * 30.0,
            minute: minutes * 6.0,
            second: seconds * 6.0,
        }
    }
}
