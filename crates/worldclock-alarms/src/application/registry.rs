//! The alarm registry: owns the alarm list and evaluates it once per tick.

use std::sync::Arc;

use worldclock_core::event::DomainEvent;
use worldclock_core::notification::NotificationSink;
use worldclock_core::tick::{ClockTick, ClockTickListener};
use worldclock_core::time_source::{TimeSource, TimeZoneId};

use crate::domain::alarm::{Alarm, AlarmId, AlarmTime};
use crate::domain::events::AlarmFired;

/// In-memory alarm list with single-shot firing.
pub struct AlarmRegistry {
    time_source: Arc<dyn TimeSource>,
    sink: Arc<dyn NotificationSink>,
    alarms: Vec<Alarm>,
    last_id: u64,
}

impl AlarmRegistry {
    /// Creates an empty registry that resolves alarm zones through
    /// `time_source` and delivers alerts to `sink`.
    #[must_use]
    pub fn new(time_source: Arc<dyn TimeSource>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            time_source,
            sink,
            alarms: Vec::new(),
            last_id: 0,
        }
    }

    /// Adds an armed alarm and returns a copy of it.
    ///
    /// `time` is stored as given; a malformed value is only reported when the
    /// alarm is evaluated.
    pub fn add(&mut self, zone: TimeZoneId, time: impl Into<String>) -> Alarm {
        self.last_id += 1;
        let alarm = Alarm {
            id: AlarmId(self.last_id),
            zone,
            time: time.into(),
            active: true,
        };
        self.alarms.push(alarm.clone());
        alarm
    }

    /// Flips `active` and returns the new value, or `None` if `id` is absent.
    pub fn toggle(&mut self, id: AlarmId) -> Option<bool> {
        let alarm = self.alarms.iter_mut().find(|alarm| alarm.id == id)?;
        alarm.active = !alarm.active;
        Some(alarm.active)
    }

    /// Deletes the alarm and returns it, or `None` if `id` is absent.
    pub fn remove(&mut self, id: AlarmId) -> Option<Alarm> {
        let index = self.alarms.iter().position(|alarm| alarm.id == id)?;
        Some(self.alarms.remove(index))
    }

    /// Looks up an alarm.
    #[must_use]
    pub fn get(&self, id: AlarmId) -> Option<&Alarm> {
        self.alarms.iter().find(|alarm| alarm.id == id)
    }

    /// All alarms in creation order.
    #[must_use]
    pub fn list(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Evaluates every armed alarm against the current time in its own zone.
    ///
    /// Nothing is evaluated unless the displayed clock is at second zero.
    /// An alarm fires when its zone reads exactly `HH:MM:00`; it is disarmed
    /// before the sink is called, so later ticks in the same second cannot
    /// fire it again. Alarms with a malformed time or an unresolvable zone
    /// are skipped for this tick.
    pub fn evaluate(&mut self, tick: &ClockTick) -> Vec<AlarmFired> {
        if tick.displayed.second != 0 {
            return Vec::new();
        }

        let mut fired = Vec::new();
        for alarm in self.alarms.iter_mut().filter(|alarm| alarm.active) {
            let trigger = match AlarmTime::parse(&alarm.time) {
                Ok(trigger) => trigger,
                Err(err) => {
                    tracing::warn!(alarm_id = %alarm.id, error = %err, "skipping alarm");
                    continue;
                }
            };
            let now = match self.time_source.resolve(&alarm.zone, tick.instant) {
                Ok(now) => now,
                Err(err) => {
                    tracing::warn!(alarm_id = %alarm.id, error = %err, "skipping alarm");
                    continue;
                }
            };
            if !trigger.matches(&now) {
                continue;
            }

            alarm.active = false;
            let event = AlarmFired::new(alarm, tick);
            tracing::info!(
                alarm_id = %alarm.id,
                zone = %alarm.zone,
                time = %alarm.time,
                correlation_id = %tick.correlation_id,
                "alarm fired"
            );
            if let Err(err) = self.sink.notify(&event.alert()) {
                tracing::warn!(alarm_id = %alarm.id, error = %err, "alert delivery failed");
            }
            fired.push(event);
        }
        fired
    }
}

impl ClockTickListener for AlarmRegistry {
    fn on_clock_tick(&mut self, tick: &ClockTick) {
        for event in self.evaluate(tick) {
            tracing::info!(
                event_type = event.event_type(),
                event_id = %event.metadata().event_id,
                correlation_id = %event.metadata().correlation_id,
                payload = %event.to_payload(),
                "domain event emitted"
            );
        }
    }
}

impl std::fmt::Debug for AlarmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlarmRegistry")
            .field("alarms", &self.alarms)
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}
