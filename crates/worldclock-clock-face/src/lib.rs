//! World Clock — Clock Face bounded context.
//!
//! Responsible for the displayed zone, the digital and date strings, the
//! analog hand angles, and kicking off alarm evaluation on every tick.

pub mod application;
pub mod domain;
