//! World Clock — Stopwatch bounded context.
//!
//! Tracks elapsed running time across start/stop/lap/reset using a
//! monotonic clock, and owns the animation-frame subscription that drives
//! the live display while running.

pub mod application;
pub mod domain;
