//! Application layer for the Alarms context.

pub mod command_handlers;
pub mod query_handlers;
pub mod registry;
