//! `StationRegistry`: dense storage for every station in a session.
//!
//! Stations are never removed, so `StationId` is a direct index into both
//! the station vector and the parallel per-station RNG vector.  The RNGs
//! live in their own field so the spawner can borrow a station and its RNG
//! mutably at the same time.

use ts_core::{Point2, RiderId, StationId, StationRng, StationShape};

use crate::Station;

/// Input for [`StationRegistry::add_station`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StationSpec {
    pub shape:    StationShape,
    pub pos:      Point2,
    pub unlocked: bool,
}

impl StationSpec {
    pub fn new(shape: StationShape, pos: Point2) -> Self {
        Self { shape, pos, unlocked: true }
    }

    pub fn locked(mut self) -> Self {
        self.unlocked = false;
        self
    }
}

pub struct StationRegistry {
    pub(crate) stations: Vec<Station>,
    pub(crate) rngs: Vec<StationRng>,
    seed: u64,
    queue_capacity: u32,
    crowding_threshold: u32,
    next_rider: u64,
}

impl StationRegistry {
    /// An empty registry.  `queue_capacity` and `crowding_threshold` are
    /// stamped onto every station added later.
    pub fn new(seed: u64, queue_capacity: u32, crowding_threshold: u32) -> Self {
        Self {
            stations: Vec::new(),
            rngs: Vec::new(),
            seed,
            queue_capacity,
            crowding_threshold,
            next_rider: 0,
        }
    }

    /// Add a station and return its id (sequential from 0).
    pub fn add_station(&mut self, spec: StationSpec) -> StationId {
        let id = StationId(self.stations.len() as u32);
        self.stations.push(Station::new(
            id,
            spec.shape,
            spec.pos,
            spec.unlocked,
            self.queue_capacity,
            self.crowding_threshold,
        ));
        self.rngs.push(StationRng::new(self.seed, id));
        tracing::debug!(station = %id, shape = %spec.shape, unlocked = spec.unlocked, "station added");
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    #[inline]
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.get_mut(id.index())
    }

    #[inline]
    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter()
    }

    /// Position of `id`, or `None` for an unknown station.
    #[inline]
    pub fn pos(&self, id: StationId) -> Option<Point2> {
        self.get(id).map(|s| s.pos)
    }

    /// Unlock `id`.  Returns `false` if the station is unknown or was
    /// already unlocked.
    pub fn unlock(&mut self, id: StationId) -> bool {
        match self.stations.get_mut(id.index()) {
            Some(s) if !s.unlocked => {
                s.unlocked = true;
                tracing::debug!(station = %id, "station unlocked");
                true
            }
            _ => false,
        }
    }

    /// Distinct shapes of all unlocked stations, in `StationShape` order.
    pub fn unlocked_shapes(&self) -> Vec<StationShape> {
        let mut present = [false; StationShape::COUNT];
        for s in self.stations.iter().filter(|s| s.unlocked) {
            present[s.shape.index()] = true;
        }
        StationShape::ALL
            .into_iter()
            .filter(|shape| present[shape.index()])
            .collect()
    }

    /// Ids of every station (locked or not) with `shape`.
    pub fn stations_with_shape(&self, shape: StationShape) -> Vec<StationId> {
        self.stations
            .iter()
            .filter(|s| s.shape == shape)
            .map(|s| s.id)
            .collect()
    }

    /// Allocate a fresh rider id.
    #[inline]
    pub fn next_rider_id(&mut self) -> RiderId {
        let id = RiderId(self.next_rider);
        self.next_rider += 1;
        id
    }

    /// Total riders waiting across all stations.
    pub fn total_waiting(&self) -> usize {
        self.stations.iter().map(Station::queue_len).sum()
    }
}
