//! Test clocks — deterministic `Clock` and `MonotonicClock` implementations.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use worldclock_core::clock::{Clock, MonotonicClock};

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A monotonic clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualMonotonicClock {
    now: Mutex<Duration>,
}

impl ManualMonotonicClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn starting_at(start: Duration) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `by`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    /// Moves the clock forward by `millis` milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl MonotonicClock for ManualMonotonicClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap()
    }
}
