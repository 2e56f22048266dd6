//! Query handlers for the Stopwatch context.

use serde::Serialize;

use crate::application::service::StopwatchService;
use crate::domain::format::format_elapsed;

/// Read-only view of one lap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapView {
    /// 1-based position in recording order.
    pub number: usize,
    /// Formatted elapsed time.
    pub elapsed: String,
    /// `Lap <n>: <elapsed>`.
    pub label: String,
}

/// Read-only view of the stopwatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchView {
    /// Formatted elapsed time.
    pub display: String,
    /// Whether the stopwatch is running.
    pub running: bool,
    /// Laps, most recent first.
    pub laps: Vec<LapView>,
}

/// Describes the stopwatch as of its clock's current reading.
#[must_use]
pub fn get_stopwatch(service: &StopwatchService) -> StopwatchView {
    let engine = service.engine();
    let laps = engine
        .laps()
        .iter()
        .map(|lap| {
            let elapsed = format_elapsed(lap.elapsed);
            LapView {
                number: lap.number,
                label: format!("Lap {}: {elapsed}", lap.number),
                elapsed,
            }
        })
        .collect();
    StopwatchView {
        display: service.display_at(service.now()),
        running: engine.is_running(),
        laps,
    }
}
