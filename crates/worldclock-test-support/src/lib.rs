//! Shared test doubles for the world clock widget.

mod clock;
mod frame;
mod notification;
mod time_source;

pub use clock::{FixedClock, ManualMonotonicClock};
pub use frame::RecordingFrameScheduler;
pub use notification::{FailingNotificationSink, RecordingNotificationSink};
pub use time_source::{FixedTimeSource, snapshot};
