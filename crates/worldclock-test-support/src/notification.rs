//! Test sinks — mock `NotificationSink` implementations for tests.

use std::sync::Mutex;

use worldclock_core::error::DomainError;
use worldclock_core::notification::{Alert, NotificationSink};

/// A sink that records every alert it receives and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingNotificationSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all alerts delivered so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, alert: &Alert) -> Result<(), DomainError> {
        self.alerts.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

/// A sink that rejects every alert, like a browser refusing autoplay.
/// Counts attempts so tests can check it was still called.
#[derive(Debug, Default)]
pub struct FailingNotificationSink {
    attempts: Mutex<usize>,
}

impl FailingNotificationSink {
    /// Number of delivery attempts so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl NotificationSink for FailingNotificationSink {
    fn notify(&self, _alert: &Alert) -> Result<(), DomainError> {
        *self.attempts.lock().unwrap() += 1;
        Err(DomainError::NotificationSinkFailure(
            "playback rejected".into(),
        ))
    }
}
