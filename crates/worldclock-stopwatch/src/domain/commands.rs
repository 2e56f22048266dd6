//! Commands for the Stopwatch context.

use uuid::Uuid;
use worldclock_core::command::Command;

/// The four stopwatch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    /// Start running.
    Start,
    /// Stop and bank elapsed time.
    Stop,
    /// Record a lap.
    Lap,
    /// Return to zero and clear laps.
    Reset,
}

/// Command carrying one stopwatch control.
#[derive(Debug, Clone)]
pub struct ControlStopwatch {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The control pressed.
    pub action: StopwatchAction,
}

impl Command for ControlStopwatch {
    fn command_type(&self) -> &'static str {
        match self.action {
            StopwatchAction::Start => "stopwatch.start",
            StopwatchAction::Stop => "stopwatch.stop",
            StopwatchAction::Lap => "stopwatch.lap",
            StopwatchAction::Reset => "stopwatch.reset",
        }
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
