//! Domain layer for the Clock Face context.

pub mod angles;
pub mod commands;
pub mod presenter;
