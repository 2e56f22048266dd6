//! Integration tests for terminal commands applied to a widget.

mod common;

use worldclock_app::terminal::{execute, parse_input};
use worldclock_core::time_source::TimeZoneId;

fn run(harness: &mut common::TestWidget, line: &str) -> Vec<String> {
    let input = parse_input(line).unwrap().unwrap();
    execute(&mut harness.widget, input)
}

#[test]
fn test_alarm_zone_is_resolved_like_zone_selection() {
    // Arrange
    let mut harness = common::build_test_widget(Some("UTC"));
    run(&mut harness, "alarm tokyo 19:00");
    run(&mut harness, "alarm asia/tokyo 19:00");

    // Act: 10:00 UTC is 19:00 in Tokyo.
    harness.widget.on_tick(common::utc(15, 10, 0, 0));

    // Assert
    let alerts = harness.sink.alerts();
    assert_eq!(alerts.len(), 2);
    assert!(
        alerts
            .iter()
            .all(|alert| alert.zone == TimeZoneId::new("Asia/Tokyo"))
    );
    assert!(harness.widget.alarms().alarms.iter().all(|alarm| !alarm.active));
}

#[test]
fn test_alarm_for_unknown_zone_is_rejected() {
    let mut harness = common::build_test_widget(Some("UTC"));

    let output = run(&mut harness, "alarm atlantis 07:00");

    assert_eq!(
        output,
        vec!["No timezone found. Try \"Asia/Kolkata\", \"London\" etc.".to_owned()]
    );
    assert!(harness.widget.alarms().alarms.is_empty());
}

#[test]
fn test_alarm_with_zone_but_no_time_asks_for_time() {
    let mut harness = common::build_test_widget(Some("UTC"));

    let output = run(&mut harness, "alarm Asia/Kolkata");

    assert_eq!(output, vec!["Set a time first!".to_owned()]);
    assert!(harness.widget.alarms().alarms.is_empty());
}

#[test]
fn test_alarm_without_zone_uses_displayed_zone() {
    let mut harness = common::build_test_widget(Some("Europe/Paris"));

    let output = run(&mut harness, "alarm 11:00");
    harness.widget.on_tick(common::utc(15, 10, 0, 0));

    assert_eq!(output, vec!["Alarm #1 set for 11:00 (Europe/Paris)".to_owned()]);
    assert_eq!(harness.sink.alerts().len(), 1);
}
