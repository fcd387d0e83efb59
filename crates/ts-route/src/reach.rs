//! Breadth-first reachability over the union of all lines.

use std::collections::VecDeque;

use ts_core::{LineId, StationId, StationShape};
use ts_network::Line;
use ts_station::{Rider, Station, StationRegistry};

/// Whether locked stations count as destinations.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReachMode {
    /// Only unlocked stations satisfy the target.  Used for onward planning.
    UnlockedOnly,
    /// Locked stations satisfy the target too, so riders may start moving
    /// towards a destination that is not yet open.
    AllowLocked,
}

/// What a search is looking for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Target {
    /// Any station of this shape.
    Shape(StationShape),
    /// Exactly this station.
    Station(StationId),
}

impl Target {
    /// The search target for `rider`: its pinned station if it has one,
    /// otherwise its shape.
    pub fn for_rider(rider: &Rider) -> Target {
        match rider.target_station {
            Some(id) => Target::Station(id),
            None => Target::Shape(rider.target_shape),
        }
    }

    /// `true` if `station` satisfies the target under `mode`.
    pub fn matches(self, station: &Station, mode: ReachMode) -> bool {
        if mode == ReachMode::UnlockedOnly && !station.unlocked {
            return false;
        }
        match self {
            Target::Shape(shape) => station.shape == shape,
            Target::Station(id) => station.id == id,
        }
    }
}

/// `true` if some station satisfying `target` can be reached from `start`
/// by walking line edges.  `start` itself counts.
///
/// Each station is visited at most once, so a search costs
/// O(stations + total line length × visited stations).
pub fn can_reach(
    start:    StationId,
    target:   Target,
    mode:     ReachMode,
    lines:    &[Line],
    stations: &StationRegistry,
) -> bool {
    if !stations.contains(start) {
        return false;
    }
    let mut visited = vec![false; stations.len()];
    let mut frontier = VecDeque::new();
    visited[start.index()] = true;
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if stations.get(current).is_some_and(|st| target.matches(st, mode)) {
            return true;
        }
        for line in lines {
            for next in line.neighbors(current) {
                match visited.get_mut(next.index()) {
                    Some(seen) if !*seen => {
                        *seen = true;
                        frontier.push_back(next);
                    }
                    _ => {}
                }
            }
        }
    }
    false
}

/// Shape-only form of [`can_reach`].
#[inline]
pub fn can_reach_shape(
    start:    StationId,
    shape:    StationShape,
    mode:     ReachMode,
    lines:    &[Line],
    stations: &StationRegistry,
) -> bool {
    can_reach(start, Target::Shape(shape), mode, lines, stations)
}

/// `true` if riding `line` alone gets to a station satisfying `target`.
pub fn line_serves(line: &Line, target: Target, mode: ReachMode, stations: &StationRegistry) -> bool {
    line.stations()
        .iter()
        .filter_map(|&id| stations.get(id))
        .any(|st| target.matches(st, mode))
}

/// `true` if `station` is served by at least two distinct lines, one of
/// which is not `current`.
pub fn is_interchange(station: StationId, current: LineId, lines: &[Line]) -> bool {
    let serving: Vec<LineId> = lines
        .iter()
        .filter(|l| l.contains(station))
        .map(|l| l.id)
        .collect();
    serving.len() >= 2 && serving.iter().any(|&id| id != current)
}
