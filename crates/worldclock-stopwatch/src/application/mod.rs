//! Application layer for the Stopwatch context.

pub mod query_handlers;
pub mod service;
