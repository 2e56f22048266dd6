//! Application layer for the Clock Face context.

pub mod command_handlers;
