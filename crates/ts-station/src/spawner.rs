//! Periodic rider spawning.
//!
//! Every unlocked station accumulates simulated seconds; each time the
//! accumulator passes the current period's spawn interval, one rider is
//! appended to the station's queue.  The rider's target shape is drawn
//! uniformly from the currently unlocked shapes other than the station's
//! own.  If exactly one station of that shape exists, its id is pinned on
//! the rider for exact-match alighting.

use ts_core::{RiderId, StationId, StationShape, Tick};

use crate::{Rider, StationRegistry};

/// A rider that appeared at a station this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnEvent {
    pub station: StationId,
    pub rider:   RiderId,
}

impl StationRegistry {
    /// Advance every unlocked station's spawn timer by `dt` seconds and
    /// spawn riders for each elapsed `interval`.
    ///
    /// Returns the spawned riders in station order.
    pub fn tick_spawns(&mut self, dt: f32, interval: f32, now: Tick) -> Vec<SpawnEvent> {
        if !(interval > 0.0) || dt <= 0.0 {
            return Vec::new();
        }
        let shapes = self.unlocked_shapes();
        let mut events = Vec::new();

        for i in 0..self.stations.len() {
            if !self.stations[i].unlocked {
                continue;
            }
            self.stations[i].spawn_elapsed += dt;
            while self.stations[i].spawn_elapsed >= interval {
                self.stations[i].spawn_elapsed -= interval;
                let station = StationId(i as u32);
                if let Some(rider) = self.spawn_from(station, &shapes, now) {
                    events.push(SpawnEvent { station, rider });
                }
            }
        }
        events
    }

    /// Spawn one rider at `station` immediately, bypassing its timer.
    ///
    /// Returns `None` if the station is unknown or no other shape is
    /// currently unlocked.
    pub fn spawn_rider(&mut self, station: StationId, now: Tick) -> Option<RiderId> {
        if !self.contains(station) {
            return None;
        }
        let shapes = self.unlocked_shapes();
        self.spawn_from(station, &shapes, now)
    }

    /// Add a rider with a caller-chosen target to `station`'s queue.
    ///
    /// The exact-station pin follows the same rule as random spawns.  Returns
    /// `None` for an unknown station or a target equal to the station's own
    /// shape.
    pub fn spawn_rider_to(
        &mut self,
        station: StationId,
        target:  StationShape,
        now:     Tick,
    ) -> Option<RiderId> {
        match self.get(station) {
            Some(st) if st.shape != target => {}
            _ => return None,
        }
        let pinned = self.pin_for(target);
        let id = self.next_rider_id();
        self.stations[station.index()].push_rider(Rider::new(id, station, target, pinned, now));
        Some(id)
    }

    fn spawn_from(
        &mut self,
        station: StationId,
        unlocked: &[StationShape],
        now: Tick,
    ) -> Option<RiderId> {
        let own = self.stations[station.index()].shape;
        let candidates: Vec<StationShape> =
            unlocked.iter().copied().filter(|&s| s != own).collect();
        let target = *self.rngs[station.index()].choose(&candidates)?;

        let pinned = self.pin_for(target);
        let id = self.next_rider_id();
        self.stations[station.index()].push_rider(Rider::new(id, station, target, pinned, now));
        tracing::trace!(%station, rider = %id, target = %target, "rider spawned");
        Some(id)
    }

    /// The single station of `shape`, if exactly one exists.
    fn pin_for(&self, shape: StationShape) -> Option<StationId> {
        match self.stations_with_shape(shape).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
