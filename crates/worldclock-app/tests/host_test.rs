//! Integration tests for the host loop fed with scripted input.

mod common;

use tokio::sync::mpsc;
use worldclock_app::host;
use worldclock_core::time_source::TimeZoneId;

#[tokio::test]
async fn test_run_applies_commands_until_quit() {
    // Arrange
    let mut harness = common::build_test_widget(Some("UTC"));
    let (_frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let script: &[u8] = b"alarm Asia/Tokyo 07:30\nzone london\nbogus\nquit\nalarm 09:00\n";

    // Act
    host::run(
        &mut harness.widget,
        &mut frame_rx,
        harness.monotonic.as_ref(),
        std::time::Duration::from_millis(200),
        script,
    )
    .await
    .unwrap();

    // Assert
    let alarms = harness.widget.alarms();
    assert_eq!(alarms.alarms.len(), 1);
    assert_eq!(alarms.alarms[0].zone, TimeZoneId::new("Asia/Tokyo"));
    assert_eq!(harness.widget.zone(), &TimeZoneId::new("Europe/London"));
}

#[tokio::test]
async fn test_run_stops_stopwatch_at_end_of_input() {
    let mut harness = common::build_test_widget(None);
    let (_frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let script: &[u8] = b"start\n";

    host::run(
        &mut harness.widget,
        &mut frame_rx,
        harness.monotonic.as_ref(),
        std::time::Duration::from_millis(200),
        script,
    )
    .await
    .unwrap();

    assert_eq!(harness.frames.requested(), 1);
    assert!(harness.frames.active().is_empty());
    assert!(!harness.widget.stopwatch().running);
}
