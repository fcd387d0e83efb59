//! Riders and their lifecycle.

use ts_core::{LineId, RiderId, StationId, StationShape, Tick};

/// Where a rider currently is.  The state always agrees with the container
/// holding the rider: a station queue holds only `Waiting` riders and a
/// vehicle holds only `OnVehicle` riders.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiderState {
    Waiting,
    OnVehicle,
    /// Delivered and scored; the rider is dropped right after.
    Arrived,
}

/// A passenger travelling towards any station of `target_shape`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rider {
    pub id: RiderId,

    /// Station the rider spawned at.
    pub origin: StationId,

    pub target_shape: StationShape,

    /// Set only when exactly one station of `target_shape` existed at spawn
    /// time.  Narrows route searches to that station; alighting still
    /// happens at any station of `target_shape`.
    pub target_station: Option<StationId>,

    pub state: RiderState,

    pub spawned_at: Tick,

    /// Line the rider last transferred off, if any.
    pub alighted_from: Option<LineId>,
}

impl Rider {
    pub fn new(
        id:             RiderId,
        origin:         StationId,
        target_shape:   StationShape,
        target_station: Option<StationId>,
        spawned_at:     Tick,
    ) -> Self {
        Self {
            id,
            origin,
            target_shape,
            target_station,
            state: RiderState::Waiting,
            spawned_at,
            alighted_from: None,
        }
    }

    /// `true` if a station of this shape ends the rider's trip.
    #[inline]
    pub fn is_destination(&self, shape: StationShape) -> bool {
        shape == self.target_shape
    }
}
