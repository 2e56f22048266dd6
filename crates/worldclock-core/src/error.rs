//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// None of these are fatal to the tick loop. Callers either fall back,
/// skip the affected item for the current tick, or report to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The timezone identifier is not known to the timezone database.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// A stored alarm time could not be parsed as `HH:MM`.
    #[error("malformed alarm time: {0:?}")]
    MalformedAlarmTime(String),

    /// The notification sink failed to deliver an alert.
    #[error("notification sink failure: {0}")]
    NotificationSinkFailure(String),

    /// User input was rejected by a command handler.
    #[error("validation error: {0}")]
    Validation(String),
}
