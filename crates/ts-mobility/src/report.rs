//! Per-tick outputs of the mobility engine.

use ts_core::{LineId, Point2, RiderId, StationId, VehicleId};
use ts_station::Rider;

/// What happened at one rider exchange.
#[derive(Clone, Debug)]
pub struct DockReport {
    pub vehicle: VehicleId,
    pub line: LineId,
    pub station: StationId,

    /// Riders delivered here, already marked `Arrived`.  The caller scores
    /// and drops them.
    pub arrived: Vec<Rider>,

    /// Riders moved from the vehicle to the back of the station queue.
    pub transferred: Vec<RiderId>,

    /// Riders moved from the station queue onto the vehicle.
    pub boarded: Vec<RiderId>,
}

/// Sampled world position of a vehicle and its heading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: Point2,
    /// Unit vector in the direction of travel.
    pub heading: Point2,
}
