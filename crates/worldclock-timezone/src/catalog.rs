//! Searchable list of zones with friendly labels.

use serde::Serialize;
use worldclock_core::error::DomainError;
use worldclock_core::time_source::{TimeSource, TimeZoneId};

/// Zones offered when the host cannot enumerate its database.
pub const FALLBACK_TIME_ZONES: [&str; 8] = [
    "UTC",
    "Asia/Kolkata",
    "Europe/London",
    "Europe/Paris",
    "America/New_York",
    "America/Los_Angeles",
    "Asia/Tokyo",
    "Australia/Sydney",
];

/// Maximum number of suggestions a zone picker shows.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 40;

/// A zone paired with the label a picker displays for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// The zone identifier.
    pub zone: TimeZoneId,
    /// Identifier without its region prefix, underscores as spaces.
    pub label: String,
}

impl CatalogEntry {
    fn matches(&self, needle: &str) -> bool {
        self.zone.as_str().to_lowercase().contains(needle)
            || self.label.to_lowercase().contains(needle)
    }
}

/// Ordered zone list backing zone search.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    entries: Vec<CatalogEntry>,
}

impl ZoneCatalog {
    /// Builds a catalog from `zones`, substituting the fallback list when
    /// `zones` is empty.
    #[must_use]
    pub fn new(zones: Vec<TimeZoneId>) -> Self {
        let zones = if zones.is_empty() {
            FALLBACK_TIME_ZONES
                .iter()
                .copied()
                .map(TimeZoneId::from)
                .collect()
        } else {
            zones
        };
        let entries = zones
            .into_iter()
            .map(|zone| CatalogEntry {
                label: friendly_label(zone.as_str()),
                zone,
            })
            .collect();
        Self { entries }
    }

    /// Builds a catalog from everything `source` can enumerate.
    #[must_use]
    pub fn from_source(source: &dyn TimeSource) -> Self {
        Self::new(source.list_time_zones())
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of zones in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true in practice: an empty zone list is replaced by the
    /// fallback list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose identifier or label contains `query`, ignoring case,
    /// capped at `limit`. A blank query suggests nothing.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .take(limit)
            .collect()
    }

    /// Resolves a free-text query to a single zone.
    ///
    /// An exact identifier match wins; otherwise the first entry whose
    /// identifier or label contains the query.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the query is blank or nothing
    /// matches.
    pub fn find(&self, query: &str) -> Result<&CatalogEntry, DomainError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(DomainError::Validation("Type a city or timezone.".into()));
        }
        self.entries
            .iter()
            .find(|entry| entry.zone.as_str().to_lowercase() == needle)
            .or_else(|| self.entries.iter().find(|entry| entry.matches(&needle)))
            .ok_or_else(|| {
                DomainError::Validation(
                    "No timezone found. Try \"Asia/Kolkata\", \"London\" etc.".into(),
                )
            })
    }
}

/// `America/Argentina/Buenos_Aires` becomes `Argentina/Buenos Aires`; an
/// identifier without a region prefix is its own label.
#[must_use]
pub fn friendly_label(zone: &str) -> String {
    match zone.split_once('/') {
        Some((_, rest)) if !rest.is_empty() => rest.replace('_', " "),
        _ => zone.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ZoneCatalog {
        ZoneCatalog::new(
            [
                "America/Argentina/Buenos_Aires",
                "America/New_York",
                "Etc/UTC",
                "Europe/London",
                "UTC",
            ]
            .into_iter()
            .map(TimeZoneId::from)
            .collect(),
        )
    }

    #[test]
    fn test_friendly_label_strips_region_and_underscores() {
        assert_eq!(friendly_label("America/New_York"), "New York");
        assert_eq!(
            friendly_label("America/Argentina/Buenos_Aires"),
            "Argentina/Buenos Aires"
        );
        assert_eq!(friendly_label("UTC"), "UTC");
    }

    #[test]
    fn test_empty_enumeration_uses_fallback_catalog() {
        let catalog = ZoneCatalog::new(Vec::new());

        assert_eq!(catalog.len(), FALLBACK_TIME_ZONES.len());
        assert!(!catalog.is_empty());
        assert_eq!(catalog.entries()[1].zone, TimeZoneId::new("Asia/Kolkata"));
        assert_eq!(catalog.entries()[1].label, "Kolkata");
    }

    #[test]
    fn test_suggest_matches_label_and_identifier_case_insensitively() {
        let catalog = catalog();

        let by_label: Vec<_> = catalog
            .suggest("new york", DEFAULT_SUGGESTION_LIMIT)
            .into_iter()
            .map(|entry| entry.zone.as_str())
            .collect();
        let by_id: Vec<_> = catalog
            .suggest("EUROPE", DEFAULT_SUGGESTION_LIMIT)
            .into_iter()
            .map(|entry| entry.zone.as_str())
            .collect();

        assert_eq!(by_label, vec!["America/New_York"]);
        assert_eq!(by_id, vec!["Europe/London"]);
    }

    #[test]
    fn test_suggest_respects_limit_and_blank_query() {
        let catalog = catalog();

        assert_eq!(catalog.suggest("america", 1).len(), 1);
        assert!(catalog.suggest("   ", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_find_prefers_exact_identifier() {
        let catalog = catalog();
        let entry = catalog.find("utc").unwrap();

        assert_eq!(entry.zone, TimeZoneId::utc());
    }

    #[test]
    fn test_find_falls_back_to_substring_match() {
        let catalog = catalog();
        let entry = catalog.find(" London ").unwrap();

        assert_eq!(entry.zone, TimeZoneId::new("Europe/London"));
    }

    #[test]
    fn test_find_reports_blank_and_missing_queries() {
        let catalog = catalog();

        assert_eq!(
            catalog.find(""),
            Err(DomainError::Validation("Type a city or timezone.".into()))
        );
        assert!(matches!(
            catalog.find("Atlantis"),
            Err(DomainError::Validation(msg)) if msg.starts_with("No timezone found")
        ));
    }
}
