//! The stopwatch state machine.
//!
//! All transitions take the current monotonic reading explicitly, so the
//! engine itself never reads a clock.

use std::time::Duration;

use serde::Serialize;

/// One recorded lap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lap {
    /// 1-based position in recording order.
    pub number: usize,
    /// Total elapsed time when the lap was recorded.
    pub elapsed: Duration,
}

/// Elapsed-time accounting across start/stop/lap/reset.
///
/// Idle when `run_started_at` is `None`, running otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchEngine {
    accumulated: Duration,
    run_started_at: Option<Duration>,
    laps: Vec<Lap>,
}

impl StopwatchEngine {
    /// Creates an idle stopwatch at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the stopwatch is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_started_at.is_some()
    }

    /// Elapsed time banked by previous runs.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Recorded laps, most recent first.
    #[must_use]
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    /// Starts running at `now`. Returns `false` if already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        self.run_started_at = Some(now);
        true
    }

    /// Stops at `now`, banking the run. Returns `false` if already idle.
    pub fn stop(&mut self, now: Duration) -> bool {
        let Some(started_at) = self.run_started_at.take() else {
            return false;
        };
        self.accumulated += now.saturating_sub(started_at);
        true
    }

    /// Elapsed time at `now`, including the live run if any.
    #[must_use]
    pub fn current_elapsed(&self, now: Duration) -> Duration {
        match self.run_started_at {
            Some(started_at) => self.accumulated + now.saturating_sub(started_at),
            None => self.accumulated,
        }
    }

    /// Records the current elapsed time as the newest lap.
    pub fn lap(&mut self, now: Duration) -> Lap {
        let lap = Lap {
            number: self.laps.len() + 1,
            elapsed: self.current_elapsed(now),
        };
        self.laps.insert(0, lap);
        lap
    }

    /// Returns to idle at zero with no laps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
