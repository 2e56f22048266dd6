//! Integration tests for the stopwatch and its frame subscription.

mod common;

use worldclock_core::clock::MonotonicClock;
use worldclock_core::frame::FrameHandle;

#[test]
fn test_running_stopwatch_redraws_on_its_frames_only() {
    // Arrange
    let mut harness = common::build_test_widget(None);
    assert!(harness.widget.start_stopwatch());
    let handle = harness.frames.active()[0];

    // Act
    harness.monotonic.advance_millis(1_500);
    let now = harness.monotonic.now();
    let live = harness.widget.on_animation_frame(handle, now);
    let stale = harness.widget.on_animation_frame(FrameHandle(handle.0 + 100), now);

    // Assert
    assert_eq!(live.as_deref(), Some("00:00:01.500"));
    assert_eq!(stale, None);
}

#[test]
fn test_start_twice_requests_one_subscription() {
    let mut harness = common::build_test_widget(None);

    assert!(harness.widget.start_stopwatch());
    assert!(!harness.widget.start_stopwatch());

    assert_eq!(harness.frames.requested(), 1);
    assert_eq!(harness.frames.active().len(), 1);
}

#[test]
fn test_stop_cancels_frames_and_freezes_display() {
    let mut harness = common::build_test_widget(None);
    harness.widget.start_stopwatch();
    let handle = harness.frames.active()[0];
    harness.monotonic.advance_millis(2_250);

    assert!(harness.widget.stop_stopwatch());
    harness.monotonic.advance_millis(10_000);

    assert!(harness.frames.active().is_empty());
    assert_eq!(harness.frames.cancelled(), vec![handle]);
    assert_eq!(
        harness
            .widget
            .on_animation_frame(handle, harness.monotonic.now()),
        None
    );
    let view = harness.widget.stopwatch();
    assert!(!view.running);
    assert_eq!(view.display, "00:00:02.250");
}

#[test]
fn test_laps_accumulate_across_runs_most_recent_first() {
    let mut harness = common::build_test_widget(None);

    harness.widget.start_stopwatch();
    harness.monotonic.advance_millis(1_000);
    harness.widget.lap();
    harness.widget.stop_stopwatch();
    harness.monotonic.advance_millis(5_000);
    harness.widget.start_stopwatch();
    harness.monotonic.advance_millis(500);
    let second = harness.widget.lap().unwrap();

    let view = harness.widget.stopwatch();
    assert_eq!(second.number, 2);
    assert_eq!(view.display, "00:00:01.500");
    assert_eq!(
        view.laps
            .iter()
            .map(|lap| lap.label.as_str())
            .collect::<Vec<_>>(),
        vec!["Lap 2: 00:00:01.500", "Lap 1: 00:00:01.000"]
    );
}

#[test]
fn test_reset_while_running_returns_to_zero() {
    let mut harness = common::build_test_widget(None);
    harness.widget.start_stopwatch();
    harness.monotonic.advance_millis(3_000);
    harness.widget.lap();

    harness.widget.reset_stopwatch();

    let view = harness.widget.stopwatch();
    assert!(!view.running);
    assert_eq!(view.display, "00:00:00.000");
    assert!(view.laps.is_empty());
    assert!(harness.frames.active().is_empty());
}
