//! Stopwatch use-case service.
//!
//! Owns the engine, the monotonic clock it is measured with, and the
//! animation-frame subscription. Frames are requested only on an actual
//! idle-to-running transition and cancelled on stop and reset, so no frame
//! callbacks outlive a logical stop.

use std::sync::Arc;
use std::time::Duration;

use worldclock_core::clock::MonotonicClock;
use worldclock_core::frame::{FrameHandle, FrameScheduler};

use crate::domain::commands::{ControlStopwatch, StopwatchAction};
use crate::domain::format::format_elapsed;
use crate::domain::stopwatch::{Lap, StopwatchEngine};

/// Result of a [`ControlStopwatch`] command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwatchOutcome {
    /// Start or stop; `false` when the stopwatch was already in that state.
    Transition(bool),
    /// The lap just recorded.
    Lapped(Lap),
    /// Back at zero.
    Reset,
}

impl StopwatchOutcome {
    /// Whether a start or stop changed the running state.
    #[must_use]
    pub fn changed(&self) -> bool {
        matches!(self, Self::Transition(true))
    }

    /// The recorded lap, for a lap command.
    #[must_use]
    pub fn into_lap(self) -> Option<Lap> {
        match self {
            Self::Lapped(lap) => Some(lap),
            _ => None,
        }
    }
}

/// Stopwatch plus its display subscription.
pub struct StopwatchService {
    clock: Arc<dyn MonotonicClock>,
    frames: Box<dyn FrameScheduler>,
    engine: StopwatchEngine,
    frame: Option<FrameHandle>,
}

impl StopwatchService {
    /// Creates an idle stopwatch measured by `clock` that redraws through
    /// `frames` while running.
    #[must_use]
    pub fn new(clock: Arc<dyn MonotonicClock>, frames: Box<dyn FrameScheduler>) -> Self {
        Self {
            clock,
            frames,
            engine: StopwatchEngine::new(),
            frame: None,
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &StopwatchEngine {
        &self.engine
    }

    /// Active frame subscription, if running.
    #[must_use]
    pub fn frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Current reading of the stopwatch's monotonic clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Starts running. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if !self.engine.start(self.clock.now()) {
            return false;
        }
        let handle = self.frames.request_frames();
        tracing::debug!(frame = %handle, "stopwatch started");
        self.frame = Some(handle);
        true
    }

    /// Stops running. Returns `false` if already idle.
    pub fn stop(&mut self) -> bool {
        let stopped = self.engine.stop(self.clock.now());
        self.cancel_frames();
        if stopped {
            tracing::debug!(
                elapsed = %format_elapsed(self.engine.accumulated()),
                "stopwatch stopped"
            );
        }
        stopped
    }

    /// Records a lap in either state.
    pub fn lap(&mut self) -> Lap {
        self.engine.lap(self.clock.now())
    }

    /// Returns to zero and clears laps, from either state.
    pub fn reset(&mut self) {
        self.cancel_frames();
        self.engine.reset();
        tracing::debug!("stopwatch reset");
    }

    /// Applies a control command.
    pub fn handle(&mut self, command: &ControlStopwatch) -> StopwatchOutcome {
        match command.action {
            StopwatchAction::Start => StopwatchOutcome::Transition(self.start()),
            StopwatchAction::Stop => StopwatchOutcome::Transition(self.stop()),
            StopwatchAction::Lap => StopwatchOutcome::Lapped(self.lap()),
            StopwatchAction::Reset => {
                self.reset();
                StopwatchOutcome::Reset
            }
        }
    }

    /// Formatted elapsed time at `now`.
    #[must_use]
    pub fn display_at(&self, now: Duration) -> String {
        format_elapsed(self.engine.current_elapsed(now))
    }

    /// Animation-frame callback. Returns the display text while running and
    /// `None` for a stray frame delivered after a stop.
    #[must_use]
    pub fn on_animation_frame(&self, now: Duration) -> Option<String> {
        self.engine.is_running().then(|| self.display_at(now))
    }

    fn cancel_frames(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.frames.cancel(handle);
        }
    }
}

impl std::fmt::Debug for StopwatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwatchService")
            .field("engine", &self.engine)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}
