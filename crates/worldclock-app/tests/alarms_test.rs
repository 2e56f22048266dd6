//! Integration tests for alarms driven by widget ticks.

mod common;

use worldclock_alarms::domain::alarm::AlarmId;
use worldclock_core::error::DomainError;
use worldclock_core::time_source::TimeZoneId;

#[test]
fn test_alarm_fires_in_its_own_zone_and_disarms() {
    // Arrange
    let mut harness = common::build_test_widget(Some("UTC"));
    let alarm = harness
        .widget
        .add_alarm(TimeZoneId::new("Asia/Kolkata"), "07:30")
        .unwrap();

    // Act: 02:00 UTC is 07:30 in Kolkata.
    harness.widget.on_tick(common::utc(15, 1, 59, 59));
    harness.widget.on_tick(common::utc(15, 2, 0, 0));
    harness.widget.on_tick(common::utc(15, 2, 0, 0));

    // Assert
    let alerts = harness.sink.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].zone, TimeZoneId::new("Asia/Kolkata"));
    assert_eq!(alerts[0].time, "07:30");
    assert_eq!(alerts[0].message, "\u{23f0} Alarm for Asia/Kolkata (07:30)");

    let list = harness.widget.alarms();
    assert_eq!(list.alarms[0].id, alarm.id);
    assert!(!list.alarms[0].active);
    assert_eq!(list.alarms[0].state, "Off");
}

#[test]
fn test_alarm_is_not_evaluated_off_the_minute() {
    let mut harness = common::build_test_widget(Some("UTC"));
    harness
        .widget
        .add_alarm(TimeZoneId::new("Asia/Kolkata"), "07:30")
        .unwrap();

    harness.widget.on_tick(common::utc(15, 2, 0, 1));
    harness.widget.on_tick(common::utc(15, 2, 0, 30));

    assert!(harness.sink.alerts().is_empty());
    assert!(harness.widget.alarms().alarms[0].active);
}

#[test]
fn test_rearmed_alarm_fires_again_next_day() {
    let mut harness = common::build_test_widget(Some("Europe/London"));
    let alarm = harness
        .widget
        .add_alarm(TimeZoneId::new("America/New_York"), "5:00")
        .unwrap();

    // 10:00 UTC is 05:00 in New York in January.
    harness.widget.on_tick(common::utc(15, 10, 0, 0));
    assert_eq!(harness.widget.toggle_alarm(alarm.id), Some(true));
    harness.widget.on_tick(common::utc(16, 10, 0, 0));

    assert_eq!(harness.sink.alerts().len(), 2);
    assert_eq!(harness.sink.alerts()[1].message, "\u{23f0} Alarm for America/New_York (5:00)");
}

#[test]
fn test_disarmed_and_malformed_alarms_do_not_fire() {
    let mut harness = common::build_test_widget(Some("UTC"));
    let disarmed = harness
        .widget
        .add_alarm(TimeZoneId::new("UTC"), "02:00")
        .unwrap();
    harness
        .widget
        .add_alarm(TimeZoneId::new("UTC"), "2 o'clock")
        .unwrap();
    harness
        .widget
        .add_alarm(TimeZoneId::new("Nowhere/Special"), "02:00")
        .unwrap();
    harness.widget.toggle_alarm(disarmed.id);

    harness.widget.on_tick(common::utc(15, 2, 0, 0));

    assert!(harness.sink.alerts().is_empty());
    assert_eq!(harness.widget.alarms().alarms.len(), 3);
}

#[test]
fn test_add_alarm_requires_a_time() {
    let mut harness = common::build_test_widget(None);

    let result = harness.widget.add_alarm(TimeZoneId::new("UTC"), "  ");

    assert_eq!(
        result,
        Err(DomainError::Validation("Set a time first!".into()))
    );
    assert_eq!(harness.widget.alarms().empty_message, Some("No alarms"));
}

#[test]
fn test_toggle_and_remove_unknown_alarm_are_noops() {
    let mut harness = common::build_test_widget(None);
    let kept = harness
        .widget
        .add_alarm(TimeZoneId::new("UTC"), "08:00")
        .unwrap();

    assert_eq!(harness.widget.toggle_alarm(AlarmId(99)), None);
    assert!(!harness.widget.remove_alarm(AlarmId(99)));
    assert!(harness.widget.remove_alarm(kept.id));
    assert!(harness.widget.alarms().alarms.is_empty());
}

#[test]
fn test_alarm_list_serializes_for_presentation() {
    let mut harness = common::build_test_widget(None);
    harness
        .widget
        .add_alarm(TimeZoneId::new("Asia/Tokyo"), "06:45")
        .unwrap();

    let json = serde_json::to_value(harness.widget.alarms()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "alarms": [{
                "id": 1,
                "time": "06:45",
                "zone": "Asia/Tokyo",
                "active": true,
                "state": "On"
            }],
            "empty_message": null
        })
    );
}
