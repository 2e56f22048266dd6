//! The clock face presenter.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use worldclock_core::error::DomainError;
use worldclock_core::tick::{ClockTick, ClockTickListener};
use worldclock_core::time_source::{TimeSource, TimeZoneId};

use super::angles::HandAngles;

/// Everything a presentation layer needs to draw the clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockFaceView {
    /// Zone the face shows. Differs from the selected zone only when the
    /// selected one could not be resolved.
    pub zone: TimeZoneId,
    /// `HH:MM:SS`.
    pub digital: String,
    /// Long-form date in the displayed zone.
    pub date_label: String,
    /// Analog hand rotations.
    pub angles: HandAngles,
    /// User-facing warning, e.g. after a zone fallback.
    pub notice: Option<String>,
}

impl ClockFaceView {
    fn from_tick(tick: &ClockTick, notice: Option<String>) -> Self {
        Self {
            zone: tick.zone.clone(),
            digital: tick.displayed.digital(),
            date_label: tick.displayed.date_label.clone(),
            angles: HandAngles::from_snapshot(&tick.displayed),
            notice,
        }
    }
}

/// Holds the selected zone and turns instants into clock faces.
pub struct ClockPresenter {
    time_source: Arc<dyn TimeSource>,
    zone: TimeZoneId,
}

impl ClockPresenter {
    /// Creates a presenter showing `zone`.
    #[must_use]
    pub fn new(time_source: Arc<dyn TimeSource>, zone: TimeZoneId) -> Self {
        Self { time_source, zone }
    }

    /// The selected zone.
    #[must_use]
    pub fn zone(&self) -> &TimeZoneId {
        &self.zone
    }

    /// Switches the displayed zone. Takes effect on the next tick.
    pub fn set_zone(&mut self, zone: TimeZoneId) {
        self.zone = zone;
    }

    /// Computes the face for `instant` and hands the tick to `listener`.
    ///
    /// An unresolvable selected zone falls back to UTC for this tick and
    /// sets a notice; the selection itself is kept.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTimeZone` only if UTC cannot be resolved
    /// either. The listener is not called in that case.
    pub fn tick(
        &self,
        instant: DateTime<Utc>,
        listener: &mut dyn ClockTickListener,
    ) -> Result<ClockFaceView, DomainError> {
        let (zone, displayed, notice) = match self.time_source.resolve(&self.zone, instant) {
            Ok(displayed) => (self.zone.clone(), displayed, None),
            Err(err) => {
                tracing::warn!(zone = %self.zone, error = %err, "falling back to UTC");
                let utc = TimeZoneId::utc();
                let displayed = self.time_source.resolve(&utc, instant)?;
                let notice = format!("Unknown time zone \"{}\"; showing UTC.", self.zone);
                (utc, displayed, Some(notice))
            }
        };

        let tick = ClockTick {
            correlation_id: Uuid::now_v7(),
            instant,
            zone,
            displayed,
        };
        let view = ClockFaceView::from_tick(&tick, notice);
        listener.on_clock_tick(&tick);
        Ok(view)
    }
}

impl std::fmt::Debug for ClockPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockPresenter")
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}
