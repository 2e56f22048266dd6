//! Command handlers for the Clock Face context.

use worldclock_core::error::DomainError;
use worldclock_core::time_source::{TimeSource, TimeZoneId};
use worldclock_timezone::ZoneCatalog;

use crate::domain::commands::{SelectZone, SetZone, UseLocalZone};
use crate::domain::presenter::ClockPresenter;

/// Handles the `SetZone` command. The zone is not checked here; an
/// unresolvable zone is reported on the next tick.
pub fn handle_set_zone(command: &SetZone, presenter: &mut ClockPresenter) {
    presenter.set_zone(command.zone.clone());
    tracing::info!(zone = %command.zone, "zone selected");
}

/// Handles the `SelectZone` command: resolves the query against `catalog`
/// and displays the match.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the query is blank or matches no
/// zone. The displayed zone is unchanged in that case.
pub fn handle_select_zone(
    command: &SelectZone,
    catalog: &ZoneCatalog,
    presenter: &mut ClockPresenter,
) -> Result<TimeZoneId, DomainError> {
    let zone = catalog.find(&command.query)?.zone.clone();
    presenter.set_zone(zone.clone());
    tracing::info!(query = %command.query, zone = %zone, "zone selected from search");
    Ok(zone)
}

/// Handles the `UseLocalZone` command.
pub fn handle_use_local_zone(
    _command: &UseLocalZone,
    time_source: &dyn TimeSource,
    presenter: &mut ClockPresenter,
) -> TimeZoneId {
    let zone = time_source.local_time_zone();
    presenter.set_zone(zone.clone());
    tracing::info!(zone = %zone, "local zone selected");
    zone
}
