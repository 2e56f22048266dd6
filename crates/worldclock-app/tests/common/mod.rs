//! Shared helpers for widget integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use worldclock_app::{Widget, WidgetPorts};
use worldclock_core::time_source::TimeZoneId;
use worldclock_test_support::{
    FixedClock, ManualMonotonicClock, RecordingFrameScheduler, RecordingNotificationSink,
};
use worldclock_timezone::TzdbTimeSource;

/// Local zone reported by the test time source.
pub const LOCAL_ZONE: &str = "Australia/Sydney";

/// A widget wired to the real zone database and inspectable fakes.
pub struct TestWidget {
    pub widget: Widget,
    pub monotonic: Arc<ManualMonotonicClock>,
    pub sink: Arc<RecordingNotificationSink>,
    pub frames: RecordingFrameScheduler,
}

/// UTC instant helper.
pub fn utc(day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, hour, minute, second)
        .unwrap()
}

/// Builds a widget showing `zone`, or the local zone when `None`.
pub fn build_test_widget(zone: Option<&str>) -> TestWidget {
    let monotonic = Arc::new(ManualMonotonicClock::default());
    let sink = Arc::new(RecordingNotificationSink::new());
    let frames = RecordingFrameScheduler::new();

    let widget = Widget::new(
        WidgetPorts {
            clock: Arc::new(FixedClock(utc(15, 10, 0, 0))),
            monotonic: monotonic.clone(),
            time_source: Arc::new(TzdbTimeSource::new().with_local_hint(LOCAL_ZONE)),
            sink: sink.clone(),
            frames: Box::new(frames.clone()),
        },
        zone.map(TimeZoneId::new),
    );

    TestWidget {
        widget,
        monotonic,
        sink,
        frames,
    }
}
