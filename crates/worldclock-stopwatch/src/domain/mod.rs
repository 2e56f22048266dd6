//! Domain layer for the Stopwatch context.

pub mod commands;
pub mod format;
pub mod stopwatch;
