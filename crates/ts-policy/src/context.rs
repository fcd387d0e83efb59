//! Read-only state passed to every policy call.

use ts_network::{Line, Vehicle};
use ts_station::{Station, StationRegistry};

/// Snapshot of one docking event.
///
/// All borrows live for the duration of the decision.  Nothing is mutated
/// while a `DockContext` is alive.
pub struct DockContext<'a> {
    /// The station the vehicle is docked at.
    pub station: &'a Station,

    /// The docked vehicle, passengers as they were on arrival.
    pub vehicle: &'a Vehicle,

    /// The vehicle's own line.
    pub line: &'a Line,

    /// Every line in the network, in creation order.
    pub lines: &'a [Line],

    /// Every station, for reachability checks.
    pub stations: &'a StationRegistry,
}

impl<'a> DockContext<'a> {
    #[inline]
    pub fn new(
        station:  &'a Station,
        vehicle:  &'a Vehicle,
        line:     &'a Line,
        lines:    &'a [Line],
        stations: &'a StationRegistry,
    ) -> Self {
        Self { station, vehicle, line, lines, stations }
    }
}
