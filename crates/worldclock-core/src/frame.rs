//! Animation-frame scheduling port.
//!
//! The stopwatch display redraws on a high-frequency callback that only
//! runs while the stopwatch is running. Hosts implement
//! [`FrameScheduler`] on top of whatever pacing primitive they have; the
//! core only requests and cancels subscriptions.

use std::fmt;

/// Opaque handle to an active frame subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Abstraction over a cancellable stream of animation-frame callbacks.
pub trait FrameScheduler: Send {
    /// Starts delivering frame callbacks until the returned handle is
    /// cancelled.
    fn request_frames(&mut self) -> FrameHandle;

    /// Stops the subscription. Cancelling an unknown or already cancelled
    /// handle is a no-op.
    fn cancel(&mut self, handle: FrameHandle);
}
