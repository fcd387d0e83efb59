//! `MobilityEngine`: moves vehicles and applies docking decisions.

use ts_core::{RiderId, StationId, TransitConfig};
use ts_network::{Direction, Line, LineNetwork, NetworkGeometry, Vehicle, VehicleState};
use ts_policy::{DockContext, TransportPolicy};
use ts_station::{Rider, RiderState, StationRegistry};

use crate::{DockReport, MobilityError, MobilityResult, Pose};

/// Drives every vehicle through its Moving / Docked cycle.
///
/// # Type parameter
///
/// `P` decides each rider exchange (e.g. [`ts_policy::ReachabilityPolicy`]).
/// It is fixed at compile time.
pub struct MobilityEngine<P: TransportPolicy> {
    pub policy: P,

    /// World units per second.
    speed: f32,

    /// Seconds a vehicle stays docked.
    dock_duration: f32,
}

impl<P: TransportPolicy> MobilityEngine<P> {
    pub fn new(policy: P, config: &TransitConfig) -> Self {
        Self {
            policy,
            speed: config.vehicle_speed,
            dock_duration: config.dock_duration_secs.max(0.0),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn dock_duration(&self) -> f32 {
        self.dock_duration
    }

    /// Advance every vehicle by `dt` seconds, in `VehicleId` order.
    ///
    /// `geometry` must be current for `network`; the owner rebuilds it after
    /// topology changes.  Returns one report per rider exchange that ran
    /// this tick.
    pub fn tick(
        &self,
        network:  &mut LineNetwork,
        geometry: &NetworkGeometry,
        stations: &mut StationRegistry,
        dt:       f32,
    ) -> MobilityResult<Vec<DockReport>> {
        if !geometry.is_current(network) {
            return Err(MobilityError::StaleGeometry(network.revision()));
        }
        let dt = dt.max(0.0);
        let (lines, vehicles) = network.split_mut();
        let mut reports = Vec::new();

        for vehicle in vehicles.iter_mut() {
            let Some(line) = lines.get(vehicle.line.index()) else {
                continue;
            };
            let mut remaining_dt = dt;
            if vehicle.state == VehicleState::Moving {
                self.advance(vehicle, line, geometry, dt);
                // Docking consumes the rest of the step.
                remaining_dt = 0.0;
            }
            if let Some(report) = self.dock(vehicle, lines, stations, remaining_dt)? {
                reports.push(report);
            }
        }
        Ok(reports)
    }

    // ── Moving ────────────────────────────────────────────────────────────

    fn advance(&self, v: &mut Vehicle, line: &Line, geometry: &NetworkGeometry, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let length = geometry.segment_length(v.line, v.segment).unwrap_or(0.0);
        let delta = if length > f32::EPSILON { self.speed * dt / length } else { 1.0 };
        v.progress += v.direction.sign() * delta;

        let end = if v.progress >= 1.0 {
            v.progress = 1.0;
            v.segment + 1
        } else if v.progress <= 0.0 {
            v.progress = 0.0;
            v.segment
        } else {
            return;
        };

        let Some(&station) = line.stations().get(end) else {
            debug_assert!(false, "segment {} out of range on {}", v.segment, line.id);
            return;
        };
        v.state = VehicleState::docked(station, self.dock_duration, v.direction);
    }

    // ── Docked ────────────────────────────────────────────────────────────

    fn dock(
        &self,
        v:        &mut Vehicle,
        lines:    &[Line],
        stations: &mut StationRegistry,
        dt:       f32,
    ) -> MobilityResult<Option<DockReport>> {
        let VehicleState::Docked { station, remaining, processed, arrived } = v.state else {
            return Ok(None);
        };
        let Some(line) = lines.get(v.line.index()) else {
            return Ok(None);
        };

        let report = if processed {
            None
        } else {
            Some(self.exchange(v, station, line, lines, stations)?)
        };

        let remaining = remaining - dt;
        if remaining > 0.0 {
            v.state = VehicleState::Docked { station, remaining, processed: true, arrived };
        } else {
            depart(v, line, arrived);
        }
        Ok(report)
    }

    /// Run the policy on a pre-mutation snapshot, then apply alight,
    /// transfer and board in that order.
    fn exchange(
        &self,
        v:        &mut Vehicle,
        station:  StationId,
        line:     &Line,
        lines:    &[Line],
        stations: &mut StationRegistry,
    ) -> MobilityResult<DockReport> {
        let plan = {
            let st = stations.get(station).ok_or(MobilityError::StationNotFound(station))?;
            let ctx = DockContext::new(st, v, line, lines, stations);
            self.policy.plan(&ctx)
        };

        let mut arrived = take_passengers(&mut v.passengers, &plan.alight);
        for rider in &mut arrived {
            rider.state = RiderState::Arrived;
        }

        let transferring = take_passengers(&mut v.passengers, &plan.transfer);
        let transferred: Vec<RiderId> = transferring.iter().map(|r| r.id).collect();

        let st = stations.get_mut(station).ok_or(MobilityError::StationNotFound(station))?;
        for mut rider in transferring {
            rider.alighted_from = Some(line.id);
            st.push_rider(rider);
        }

        let seats = v.spare_capacity().min(plan.board.len());
        let boarding = st.take_riders(&plan.board[..seats]);
        let boarded: Vec<RiderId> = boarding.iter().map(|r| r.id).collect();
        for mut rider in boarding {
            rider.state = RiderState::OnVehicle;
            rider.alighted_from = None;
            v.passengers.push(rider);
        }
        debug_assert!(v.passengers.len() <= v.capacity as usize);

        tracing::debug!(
            vehicle = %v.id,
            %station,
            arrived = arrived.len(),
            transferred = transferred.len(),
            boarded = boarded.len(),
            "docked",
        );

        Ok(DockReport { vehicle: v.id, line: line.id, station, arrived, transferred, boarded })
    }
}

/// World position and heading of `vehicle`, or `None` if `geometry` has no
/// path for its line.
pub fn vehicle_pose(vehicle: &Vehicle, geometry: &NetworkGeometry) -> Option<Pose> {
    let position = geometry.position(vehicle.line, vehicle.segment, vehicle.progress)?;
    let tangent = geometry.tangent(vehicle.line, vehicle.segment, vehicle.progress)?;
    Some(Pose { position, heading: tangent * vehicle.direction.sign() })
}

/// Leave the current station: forward from the first station, backward from
/// the last, otherwise in the arrival direction.
fn depart(v: &mut Vehicle, line: &Line, arrived: Direction) {
    let last = line.len().saturating_sub(1);
    let idx = v.station_index().min(last);
    let direction = if idx == 0 {
        Direction::Forward
    } else if idx == last {
        Direction::Backward
    } else {
        arrived
    };

    match direction {
        Direction::Forward => {
            v.segment = idx;
            v.progress = 0.0;
        }
        Direction::Backward => {
            v.segment = idx - 1;
            v.progress = 1.0;
        }
    }
    v.direction = direction;
    v.state = VehicleState::Moving;
}

/// Remove the passengers listed in `ids`, keeping order on both sides.
fn take_passengers(passengers: &mut Vec<Rider>, ids: &[RiderId]) -> Vec<Rider> {
    if ids.is_empty() {
        return Vec::new();
    }
    let (taken, kept): (Vec<Rider>, Vec<Rider>) =
        std::mem::take(passengers).into_iter().partition(|r| ids.contains(&r.id));
    *passengers = kept;
    taken
}
