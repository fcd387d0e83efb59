//! Per-vehicle movement state.

use ts_core::{LineId, StationId, VehicleId};
use ts_station::Rider;

/// Travel direction along the line's station sequence.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    /// Towards the last station (increasing segment index).
    #[default]
    Forward,
    /// Towards the first station.
    Backward,
}

impl Direction {
    /// `+1.0` forward, `-1.0` backward.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward  => 1.0,
            Direction::Backward => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward  => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// The two-state vehicle machine.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum VehicleState {
    /// Travelling along the current segment.
    Moving,
    /// Stationary at `station`.
    Docked {
        station: StationId,
        /// Dock time left, in seconds.
        remaining: f32,
        /// Set once the dock's rider exchange has run.
        processed: bool,
        /// Direction the vehicle was travelling when it docked.
        arrived: Direction,
    },
}

impl VehicleState {
    /// Fresh dock at `station`, rider exchange still pending.
    pub fn docked(station: StationId, duration: f32, arrived: Direction) -> Self {
        VehicleState::Docked { station, remaining: duration, processed: false, arrived }
    }
}

/// A vehicle owned by exactly one line.
///
/// Position is `(segment, progress)`: `progress` runs from 0 at
/// `stations[segment]` to 1 at `stations[segment + 1]` regardless of
/// `direction`.  `segment` always satisfies `segment <= line.len() - 2`.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleId,
    pub line: LineId,
    pub segment: usize,
    pub progress: f32,
    pub direction: Direction,
    pub state: VehicleState,
    pub capacity: u32,
    pub passengers: Vec<Rider>,
}

impl Vehicle {
    /// A new vehicle, docked at the line's first station so its first
    /// boarding happens before it moves.
    pub(crate) fn new(
        id:            VehicleId,
        line:          LineId,
        first_station: StationId,
        capacity:      u32,
        dock_duration: f32,
    ) -> Self {
        Self {
            id,
            line,
            segment: 0,
            progress: 0.0,
            direction: Direction::Forward,
            state: VehicleState::docked(first_station, dock_duration, Direction::Forward),
            capacity,
            passengers: Vec::new(),
        }
    }

    #[inline]
    pub fn is_docked(&self) -> bool {
        matches!(self.state, VehicleState::Docked { .. })
    }

    /// The station the vehicle is docked at, if any.
    #[inline]
    pub fn docked_station(&self) -> Option<StationId> {
        match self.state {
            VehicleState::Docked { station, .. } => Some(station),
            VehicleState::Moving => None,
        }
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Free seats.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.passengers.len())
    }

    /// Index in the line's station sequence of the station the vehicle sits
    /// on: the segment start at `progress == 0`, the segment end at
    /// `progress == 1`.
    #[inline]
    pub fn station_index(&self) -> usize {
        if self.progress >= 1.0 { self.segment + 1 } else { self.segment }
    }
}
