//! A single coloured line.

use ts_core::{LineColor, LineId, StationId, VehicleId};

/// An ordered sequence of at least two stations.  Sequence order is travel
/// order; segment `i` runs from `stations[i]` to `stations[i + 1]`.
///
/// Only [`LineNetwork`](crate::LineNetwork) mutates lines, which keeps
/// vehicle segment indices consistent with the sequence.
#[derive(Clone, Debug)]
pub struct Line {
    pub id: LineId,
    pub color: LineColor,
    pub(crate) stations: Vec<StationId>,
    pub(crate) vehicles: Vec<VehicleId>,
}

impl Line {
    pub(crate) fn new(id: LineId, color: LineColor, a: StationId, b: StationId) -> Self {
        Self { id, color, stations: vec![a, b], vehicles: Vec::new() }
    }

    #[inline]
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    #[inline]
    pub fn vehicles(&self) -> &[VehicleId] {
        &self.vehicles
    }

    #[inline]
    pub fn first(&self) -> StationId {
        self.stations[0]
    }

    #[inline]
    pub fn last(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Lines always hold at least two stations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Endpoints of segment `i`.
    pub fn segment(&self, i: usize) -> Option<(StationId, StationId)> {
        Some((*self.stations.get(i)?, *self.stations.get(i + 1)?))
    }

    #[inline]
    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }

    #[inline]
    pub fn position_of(&self, station: StationId) -> Option<usize> {
        self.stations.iter().position(|&s| s == station)
    }

    /// Stations adjacent to `station` on this line (zero, one or two).
    pub fn neighbors(&self, station: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.stations
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == station)
            .flat_map(move |(i, _)| {
                let prev = i.checked_sub(1).map(|p| self.stations[p]);
                let next = self.stations.get(i + 1).copied();
                prev.into_iter().chain(next)
            })
    }
}
