//! World Clock — composition root.
//!
//! Wires the clock face, alarm and stopwatch contexts into a [`Widget`]
//! with a plain command/query surface, and provides a tokio host that
//! drives it from a fixed-interval ticker and a cancellable frame stream.

pub mod config;
pub mod error;
pub mod host;
pub mod terminal;
pub mod widget;

pub use widget::{Widget, WidgetPorts};
