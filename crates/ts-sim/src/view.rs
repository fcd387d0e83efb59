//! Read-only views handed to the UI layer and to observers.

use ts_core::{LineId, Point2, RiderId, SimClock, StationId, StationShape, Tick, VehicleId};
use ts_mobility::vehicle_pose;
use ts_network::{Direction, LineNetwork, NetworkGeometry, Vehicle, VehicleState};
use ts_station::{Station, StationRegistry};

/// Where a vehicle is and what it carries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleView {
    pub id: VehicleId,
    pub line: LineId,
    pub position: Point2,
    /// Unit vector in the direction of travel.
    pub tangent: Point2,
    pub state: VehicleState,
    pub direction: Direction,
    pub segment: usize,
    pub progress: f32,
    pub passengers: usize,
    pub capacity: u32,
}

impl VehicleView {
    pub(crate) fn of(vehicle: &Vehicle, geometry: &NetworkGeometry) -> Option<Self> {
        let pose = vehicle_pose(vehicle, geometry)?;
        Some(Self {
            id:         vehicle.id,
            line:       vehicle.line,
            position:   pose.position,
            tangent:    pose.heading,
            state:      vehicle.state,
            direction:  vehicle.direction,
            segment:    vehicle.segment,
            progress:   vehicle.progress,
            passengers: vehicle.passenger_count(),
            capacity:   vehicle.capacity,
        })
    }
}

/// One waiting rider, in boarding order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueuedRider {
    pub id: RiderId,
    /// Position in the queue; also the render offset.
    pub slot: usize,
    pub target_shape: StationShape,
    pub target_station: Option<StationId>,
    pub spawned_at: Tick,
}

pub(crate) fn queue_view(station: &Station) -> Vec<QueuedRider> {
    station
        .queue()
        .iter()
        .enumerate()
        .map(|(slot, r)| QueuedRider {
            id:             r.id,
            slot,
            target_shape:   r.target_shape,
            target_station: r.target_station,
            spawned_at:     r.spawned_at,
        })
        .collect()
}

/// Counters for one completed tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    pub elapsed_secs: f64,
    pub period: u32,
    pub spawned: usize,
    pub arrived: usize,
    pub transferred: usize,
    pub boarded: usize,
    /// Riders in station queues after the tick.
    pub waiting: usize,
    /// Riders on vehicles after the tick.
    pub onboard: usize,
    /// Running score.
    pub score: u64,
}

/// Borrowed view of the whole simulation at a snapshot tick.
pub struct SimSnapshot<'a> {
    pub tick: Tick,
    pub clock: &'a SimClock,
    pub stations: &'a StationRegistry,
    pub network: &'a LineNetwork,
    pub geometry: &'a NetworkGeometry,
}

impl<'a> SimSnapshot<'a> {
    /// Every vehicle in `VehicleId` order.
    pub fn vehicles(&self) -> impl Iterator<Item = VehicleView> + '_ {
        self.network
            .vehicles()
            .iter()
            .filter_map(|v| VehicleView::of(v, self.geometry))
    }

    /// Waiting riders at `station`, front first.
    pub fn queue(&self, station: StationId) -> Option<Vec<QueuedRider>> {
        self.stations.get(station).map(queue_view)
    }
}
