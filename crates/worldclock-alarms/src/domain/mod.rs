//! Domain layer for the Alarms context.

pub mod alarm;
pub mod commands;
pub mod events;
