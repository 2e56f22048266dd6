//! Clock tick contract between the presenter and its listeners.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::time_source::{CalendarSnapshot, TimeZoneId};

/// Default cadence of the clock/alarm path.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Default cadence of animation frames while the stopwatch runs.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// One evaluation of the clock face.
#[derive(Debug, Clone)]
pub struct ClockTick {
    /// Correlation ID shared by everything this tick causes.
    pub correlation_id: Uuid,
    /// Wall-clock instant the tick was taken at.
    pub instant: DateTime<Utc>,
    /// Zone that was displayed.
    pub zone: TimeZoneId,
    /// Calendar fields of `instant` in `zone`.
    pub displayed: CalendarSnapshot,
}

/// Receives each tick after the clock face has been computed.
pub trait ClockTickListener {
    /// Called exactly once per tick.
    fn on_clock_tick(&mut self, tick: &ClockTick);
}
