//! Environment configuration for the host binary.

use std::time::Duration;

use worldclock_core::tick::{DEFAULT_FRAME_INTERVAL, DEFAULT_TICK_INTERVAL};

use crate::error::AppError;

/// Host settings read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Zone to show first; the local zone when unset.
    pub initial_zone: Option<String>,
    /// Local zone hint in `TZ` syntax.
    pub local_zone_hint: Option<String>,
    /// Clock/alarm tick cadence.
    pub tick_interval: Duration,
    /// Stopwatch redraw cadence.
    pub frame_interval: Duration,
    /// Whether to enumerate the full zone database.
    pub enumerate_zones: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_zone: None,
            local_zone_hint: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            enumerate_zones: true,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let tick_interval = match non_blank("WORLDCLOCK_TICK_MS") {
            Some(value) => parse_millis("WORLDCLOCK_TICK_MS", &value)?,
            None => defaults.tick_interval,
        };
        let frame_interval = match non_blank("WORLDCLOCK_FRAME_MS") {
            Some(value) => parse_millis("WORLDCLOCK_FRAME_MS", &value)?,
            None => defaults.frame_interval,
        };
        let enumerate_zones = match non_blank("WORLDCLOCK_ENUMERATE_ZONES") {
            Some(value) => parse_bool("WORLDCLOCK_ENUMERATE_ZONES", &value)?,
            None => defaults.enumerate_zones,
        };

        Ok(Self {
            initial_zone: non_blank("WORLDCLOCK_TIME_ZONE").map(|zone| zone.trim().to_owned()),
            local_zone_hint: non_blank("TZ"),
            tick_interval,
            frame_interval,
            enumerate_zones,
        })
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, AppError> {
    let millis: u64 = value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{key} must be a whole number of milliseconds: {e}")))?;
    if millis == 0 {
        return Err(AppError::Config(format!("{key} must be > 0")));
    }
    Ok(Duration::from_millis(millis))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be true or false, got {other:?}"
        ))),
    }
}
