//! Command handlers for the Alarms context.
//!
//! Validates user input and applies it to the registry.

use worldclock_core::error::DomainError;

use crate::application::registry::AlarmRegistry;
use crate::domain::alarm::Alarm;
use crate::domain::commands::{AddAlarm, RemoveAlarm, ToggleAlarm};

/// Handles the `AddAlarm` command.
///
/// Only blank input is rejected here. A time that is present but malformed
/// is stored and skipped at evaluation.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the time or zone is blank.
pub fn handle_add_alarm(
    command: &AddAlarm,
    registry: &mut AlarmRegistry,
) -> Result<Alarm, DomainError> {
    let time = command.time.trim();
    if time.is_empty() {
        return Err(DomainError::Validation("Set a time first!".into()));
    }
    if command.zone.as_str().trim().is_empty() {
        return Err(DomainError::Validation(
            "alarm time zone must not be empty".into(),
        ));
    }

    let alarm = registry.add(command.zone.clone(), time);
    tracing::info!(alarm_id = %alarm.id, zone = %alarm.zone, time = %alarm.time, "alarm set");
    Ok(alarm)
}

/// Handles the `ToggleAlarm` command. Returns the new `active` value, or
/// `None` when the alarm does not exist.
pub fn handle_toggle_alarm(command: &ToggleAlarm, registry: &mut AlarmRegistry) -> Option<bool> {
    let active = registry.toggle(command.alarm_id);
    match active {
        Some(active) => tracing::info!(alarm_id = %command.alarm_id, active, "alarm toggled"),
        None => tracing::debug!(alarm_id = %command.alarm_id, "toggle ignored, no such alarm"),
    }
    active
}

/// Handles the `RemoveAlarm` command. Returns whether an alarm was deleted.
pub fn handle_remove_alarm(command: &RemoveAlarm, registry: &mut AlarmRegistry) -> bool {
    let removed = registry.remove(command.alarm_id).is_some();
    if removed {
        tracing::info!(alarm_id = %command.alarm_id, "alarm removed");
    }
    removed
}
