//! The world clock widget: one clock face, one alarm list, one stopwatch.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use worldclock_alarms::application::command_handlers::{
    handle_add_alarm, handle_remove_alarm, handle_toggle_alarm,
};
use worldclock_alarms::application::query_handlers::{AlarmListView, AlarmView, list_alarms};
use worldclock_alarms::application::registry::AlarmRegistry;
use worldclock_alarms::domain::alarm::AlarmId;
use worldclock_alarms::domain::commands::{AddAlarm, RemoveAlarm, ToggleAlarm};
use worldclock_clock_face::application::command_handlers::{
    handle_select_zone, handle_set_zone, handle_use_local_zone,
};
use worldclock_clock_face::domain::commands::{SelectZone, SetZone, UseLocalZone};
use worldclock_clock_face::domain::presenter::{ClockFaceView, ClockPresenter};
use worldclock_core::clock::{Clock, MonotonicClock};
use worldclock_core::command::command_span;
use worldclock_core::error::DomainError;
use worldclock_core::frame::{FrameHandle, FrameScheduler};
use worldclock_core::notification::NotificationSink;
use worldclock_core::time_source::{TimeSource, TimeZoneId};
use worldclock_stopwatch::application::query_handlers::{StopwatchView, get_stopwatch};
use worldclock_stopwatch::application::service::{StopwatchOutcome, StopwatchService};
use worldclock_stopwatch::domain::commands::{ControlStopwatch, StopwatchAction};
use worldclock_stopwatch::domain::stopwatch::Lap;
use worldclock_timezone::{CatalogEntry, DEFAULT_SUGGESTION_LIMIT, ZoneCatalog};

/// External capabilities the widget is wired to.
pub struct WidgetPorts {
    /// Wall clock for ticks.
    pub clock: Arc<dyn Clock>,
    /// Monotonic clock for the stopwatch.
    pub monotonic: Arc<dyn MonotonicClock>,
    /// Timezone conversion and enumeration.
    pub time_source: Arc<dyn TimeSource>,
    /// Where fired alarms are announced.
    pub sink: Arc<dyn NotificationSink>,
    /// Stopwatch redraw subscription.
    pub frames: Box<dyn FrameScheduler>,
}

/// Composition of the clock face, alarms and stopwatch behind a
/// command/query surface.
pub struct Widget {
    clock: Arc<dyn Clock>,
    time_source: Arc<dyn TimeSource>,
    catalog: ZoneCatalog,
    presenter: ClockPresenter,
    alarms: AlarmRegistry,
    stopwatch: StopwatchService,
    face: Option<ClockFaceView>,
}

impl Widget {
    /// Builds the widget. The face shows `initial_zone`, or the time
    /// source's local zone when `None`.
    #[must_use]
    pub fn new(ports: WidgetPorts, initial_zone: Option<TimeZoneId>) -> Self {
        let WidgetPorts {
            clock,
            monotonic,
            time_source,
            sink,
            frames,
        } = ports;

        let catalog = ZoneCatalog::from_source(time_source.as_ref());
        let zone = initial_zone.unwrap_or_else(|| time_source.local_time_zone());
        tracing::info!(zone = %zone, zones = catalog.len(), "widget initialised");

        Self {
            presenter: ClockPresenter::new(Arc::clone(&time_source), zone),
            alarms: AlarmRegistry::new(Arc::clone(&time_source), sink),
            stopwatch: StopwatchService::new(monotonic, frames),
            clock,
            time_source,
            catalog,
            face: None,
        }
    }

    // ---- Ticks and frames ----

    /// Ticks at the wall clock's current instant.
    pub fn tick_now(&mut self) -> Option<&ClockFaceView> {
        let instant = self.clock.now();
        self.on_tick(instant)
    }

    /// Refreshes the face for `instant` and evaluates alarms. On failure the
    /// previous face is kept and the tick is skipped.
    pub fn on_tick(&mut self, instant: DateTime<Utc>) -> Option<&ClockFaceView> {
        match self.presenter.tick(instant, &mut self.alarms) {
            Ok(view) => self.face = Some(view),
            Err(err) => tracing::error!(error = %err, "tick skipped"),
        }
        self.face.as_ref()
    }

    /// Stopwatch redraw for a delivered frame. Returns `None` for frames
    /// that do not belong to the live subscription.
    pub fn on_animation_frame(&mut self, handle: FrameHandle, now: Duration) -> Option<String> {
        if self.stopwatch.frame() != Some(handle) {
            tracing::trace!(frame = %handle, "stale frame dropped");
            return None;
        }
        self.stopwatch.on_animation_frame(now)
    }

    // ---- Clock face commands ----

    /// Displays `zone` from the next tick on.
    pub fn set_zone(&mut self, zone: TimeZoneId) {
        let command = SetZone {
            correlation_id: Uuid::now_v7(),
            zone,
        };
        let _span = command_span(&command).entered();
        handle_set_zone(&command, &mut self.presenter);
    }

    /// Displays the zone best matching `query`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the query is blank or matches
    /// nothing.
    pub fn select_zone(&mut self, query: &str) -> Result<TimeZoneId, DomainError> {
        let command = SelectZone {
            correlation_id: Uuid::now_v7(),
            query: query.to_owned(),
        };
        let _span = command_span(&command).entered();
        handle_select_zone(&command, &self.catalog, &mut self.presenter)
    }

    /// The catalog zone best matching `query`, without selecting it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the query is blank or matches
    /// nothing.
    pub fn resolve_zone(&self, query: &str) -> Result<TimeZoneId, DomainError> {
        Ok(self.catalog.find(query)?.zone.clone())
    }

    /// Displays the local zone.
    pub fn use_local_zone(&mut self) -> TimeZoneId {
        let command = UseLocalZone {
            correlation_id: Uuid::now_v7(),
        };
        let _span = command_span(&command).entered();
        handle_use_local_zone(&command, self.time_source.as_ref(), &mut self.presenter)
    }

    // ---- Alarm commands ----

    /// Adds an armed alarm at `time` in `zone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `time` or `zone` is blank.
    pub fn add_alarm(&mut self, zone: TimeZoneId, time: &str) -> Result<AlarmView, DomainError> {
        let command = AddAlarm {
            correlation_id: Uuid::now_v7(),
            zone,
            time: time.to_owned(),
        };
        let _span = command_span(&command).entered();
        handle_add_alarm(&command, &mut self.alarms).map(|alarm| AlarmView::from(&alarm))
    }

    /// Flips an alarm's armed state. `None` if the alarm does not exist.
    pub fn toggle_alarm(&mut self, alarm_id: AlarmId) -> Option<bool> {
        let command = ToggleAlarm {
            correlation_id: Uuid::now_v7(),
            alarm_id,
        };
        let _span = command_span(&command).entered();
        handle_toggle_alarm(&command, &mut self.alarms)
    }

    /// Deletes an alarm. Returns whether one was removed.
    pub fn remove_alarm(&mut self, alarm_id: AlarmId) -> bool {
        let command = RemoveAlarm {
            correlation_id: Uuid::now_v7(),
            alarm_id,
        };
        let _span = command_span(&command).entered();
        handle_remove_alarm(&command, &mut self.alarms)
    }

    // ---- Stopwatch commands ----

    /// Starts the stopwatch. Returns `false` if it was already running.
    pub fn start_stopwatch(&mut self) -> bool {
        self.control_stopwatch(StopwatchAction::Start).changed()
    }

    /// Stops the stopwatch. Returns `false` if it was already idle.
    pub fn stop_stopwatch(&mut self) -> bool {
        self.control_stopwatch(StopwatchAction::Stop).changed()
    }

    /// Records a lap.
    pub fn lap(&mut self) -> Option<Lap> {
        self.control_stopwatch(StopwatchAction::Lap).into_lap()
    }

    /// Resets the stopwatch to zero and clears laps.
    pub fn reset_stopwatch(&mut self) {
        self.control_stopwatch(StopwatchAction::Reset);
    }

    fn control_stopwatch(&mut self, action: StopwatchAction) -> StopwatchOutcome {
        let command = ControlStopwatch {
            correlation_id: Uuid::now_v7(),
            action,
        };
        let _span = command_span(&command).entered();
        self.stopwatch.handle(&command)
    }

    // ---- Queries ----

    /// The last successfully computed face.
    #[must_use]
    pub fn face(&self) -> Option<&ClockFaceView> {
        self.face.as_ref()
    }

    /// The selected zone.
    #[must_use]
    pub fn zone(&self) -> &TimeZoneId {
        self.presenter.zone()
    }

    /// The alarm list.
    #[must_use]
    pub fn alarms(&self) -> AlarmListView {
        list_alarms(&self.alarms)
    }

    /// The stopwatch as of now.
    #[must_use]
    pub fn stopwatch(&self) -> StopwatchView {
        get_stopwatch(&self.stopwatch)
    }

    /// Zone suggestions for a picker.
    #[must_use]
    pub fn suggest_zones(&self, query: &str) -> Vec<&CatalogEntry> {
        self.catalog.suggest(query, DEFAULT_SUGGESTION_LIMIT)
    }
}

impl std::fmt::Debug for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Widget")
            .field("presenter", &self.presenter)
            .field("alarms", &self.alarms)
            .field("stopwatch", &self.stopwatch)
            .field("face", &self.face)
            .finish_non_exhaustive()
    }
}
