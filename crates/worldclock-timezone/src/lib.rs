//! World Clock — timezone context.
//!
//! Provides the `chrono-tz` backed [`TzdbTimeSource`] and the searchable
//! [`ZoneCatalog`] used by zone pickers.

pub mod catalog;
pub mod tzdb;

pub use catalog::{
    CatalogEntry, DEFAULT_SUGGESTION_LIMIT, FALLBACK_TIME_ZONES, ZoneCatalog, friendly_label,
};
pub use tzdb::TzdbTimeSource;
