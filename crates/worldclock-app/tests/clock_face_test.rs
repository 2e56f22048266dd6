//! Integration tests for the clock face through the widget.

mod common;

use worldclock_core::error::DomainError;
use worldclock_core::time_source::TimeZoneId;

#[test]
fn test_face_shows_selected_zone_time_and_date() {
    // Arrange
    let mut harness = common::build_test_widget(Some("Asia/Tokyo"));

    // Act
    let face = harness
        .widget
        .on_tick(common::utc(15, 10, 0, 0))
        .cloned()
        .unwrap();

    // Assert
    let json = serde_json::to_value(&face).unwrap();
    assert_eq!(json["zone"], "Asia/Tokyo");
    assert_eq!(json["digital"], "19:00:00");
    assert_eq!(json["date_label"], "Thursday, Jan 15, 2026");
    assert_eq!(json["angles"]["hour"], 210.0);
    assert_eq!(json["angles"]["minute"], 0.0);
    assert_eq!(json["notice"], serde_json::Value::Null);
}

#[test]
fn test_face_defaults_to_local_zone() {
    let mut harness = common::build_test_widget(None);

    let face = harness.widget.tick_now().cloned().unwrap();

    // 10:00 UTC is 21:00 in Sydney (UTC+11 in January).
    assert_eq!(face.zone, TimeZoneId::new(common::LOCAL_ZONE));
    assert_eq!(face.digital, "21:00:00");
}

#[test]
fn test_unknown_zone_shows_utc_with_notice() {
    let mut harness = common::build_test_widget(Some("Asia/Tokyo"));

    harness.widget.set_zone(TimeZoneId::new("Mars/Olympus_Mons"));
    let face = harness
        .widget
        .on_tick(common::utc(15, 10, 0, 0))
        .cloned()
        .unwrap();

    assert_eq!(face.zone, TimeZoneId::utc());
    assert_eq!(face.digital, "10:00:00");
    assert_eq!(
        face.notice.as_deref(),
        Some("Unknown time zone \"Mars/Olympus_Mons\"; showing UTC.")
    );
    assert_eq!(harness.widget.zone(), &TimeZoneId::new("Mars/Olympus_Mons"));
}

#[test]
fn test_select_zone_by_city_and_use_local_zone() {
    let mut harness = common::build_test_widget(Some("UTC"));

    let selected = harness.widget.select_zone("kolkata").unwrap();
    let face = harness
        .widget
        .on_tick(common::utc(15, 10, 0, 0))
        .cloned()
        .unwrap();
    assert_eq!(selected, TimeZoneId::new("Asia/Kolkata"));
    assert_eq!(face.digital, "15:30:00");

    let local = harness.widget.use_local_zone();
    assert_eq!(local, TimeZoneId::new(common::LOCAL_ZONE));
    assert_eq!(harness.widget.zone(), &local);
}

#[test]
fn test_select_zone_reports_no_match_and_keeps_zone() {
    let mut harness = common::build_test_widget(Some("Europe/Paris"));

    let blank = harness.widget.select_zone("   ");
    let missing = harness.widget.select_zone("Atlantis");

    assert_eq!(
        blank,
        Err(DomainError::Validation("Type a city or timezone.".into()))
    );
    assert_eq!(
        missing,
        Err(DomainError::Validation(
            "No timezone found. Try \"Asia/Kolkata\", \"London\" etc.".into()
        ))
    );
    assert_eq!(harness.widget.zone(), &TimeZoneId::new("Europe/Paris"));
}

#[test]
fn test_suggest_zones_caps_results() {
    let harness = common::build_test_widget(None);

    let america = harness.widget.suggest_zones("america");
    let london = harness.widget.suggest_zones("london");

    assert_eq!(america.len(), 40);
    assert!(
        london
            .iter()
            .any(|entry| entry.zone == TimeZoneId::new("Europe/London"))
    );
}
