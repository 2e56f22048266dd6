//! World Clock — Alarms bounded context.
//!
//! Responsible for the in-memory alarm list, per-tick evaluation of each
//! alarm in its own zone, auto-disarm after firing, and handing alerts to
//! the notification sink.

pub mod application;
pub mod domain;
