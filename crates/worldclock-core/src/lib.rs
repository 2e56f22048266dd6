//! World Clock Core — shared ports and domain abstractions.
//!
//! This crate defines the traits and value types that the clock face,
//! alarm and stopwatch contexts depend on. It contains no host or
//! infrastructure code: wall time, monotonic time, timezone conversion,
//! notifications and frame scheduling all enter through the ports here.

pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod frame;
pub mod notification;
pub mod tick;
pub mod time_source;
