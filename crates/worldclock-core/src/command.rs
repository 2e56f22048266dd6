//! Command abstractions.
//!
//! Every inbound call from a presentation layer (zone selection, alarm
//! edits, stopwatch controls) is modelled as a command so that it can be
//! traced with a correlation ID.

use tracing::Span;
use uuid::Uuid;

/// Trait that all user-initiated commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;
}

/// Opens an `info` span tagged with the command's type and correlation ID.
pub fn command_span(command: &dyn Command) -> Span {
    tracing::info_span!(
        "command",
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
    )
}
