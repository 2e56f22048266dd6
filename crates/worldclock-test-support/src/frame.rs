//! Test frame scheduler — records subscription requests and cancellations.

use std::sync::{Arc, Mutex};

use worldclock_core::frame::{FrameHandle, FrameScheduler};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    active: Vec<FrameHandle>,
    requested: usize,
    cancelled: Vec<FrameHandle>,
}

/// A frame scheduler that delivers no frames and only tracks bookkeeping.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingFrameScheduler {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingFrameScheduler {
    /// Creates a scheduler with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriptions requested and not yet cancelled.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn active(&self) -> Vec<FrameHandle> {
        self.inner.lock().unwrap().active.clone()
    }

    /// Total number of `request_frames` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested(&self) -> usize {
        self.inner.lock().unwrap().requested
    }

    /// Handles passed to `cancel`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.inner.lock().unwrap().cancelled.clone()
    }
}

impl FrameScheduler for RecordingFrameScheduler {
    fn request_frames(&mut self) -> FrameHandle {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        inner.requested += 1;
        let handle = FrameHandle(inner.next_id);
        inner.active.push(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        let mut inner = self.inner.lock().unwrap();
        inner.active.retain(|active| *active != handle);
        inner.cancelled.push(handle);
    }
}
