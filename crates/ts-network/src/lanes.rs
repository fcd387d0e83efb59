//! Parallel-lane assignment.
//!
//! When several lines run between the same pair of stations, each gets a
//! lane by creation order: the first line keeps the centre (lane 0), later
//! ones alternate outward `+1, -1, +2, -2, …`.  Lines are stored in
//! creation order, so the layout is a pure function of the action history.

use std::collections::BTreeMap;

use ts_core::StationId;

use crate::Line;

/// Lane multiplier for the `rank`-th line (0-based) on an edge.
#[inline]
pub fn lane_for_rank(rank: usize) -> i32 {
    if rank == 0 {
        return 0;
    }
    let step = rank.div_ceil(2) as i32;
    if rank % 2 == 1 { step } else { -step }
}

/// Undirected edge key: smaller station id first.
#[inline]
pub(crate) fn edge_key(a: StationId, b: StationId) -> (StationId, StationId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Lane of every segment of every line: `lanes[line][segment]`.
///
/// `lines` must be in creation order, as `LineNetwork::lines` returns them.
pub fn assign_lanes(lines: &[Line]) -> Vec<Vec<i32>> {
    let mut occupants: BTreeMap<(StationId, StationId), usize> = BTreeMap::new();
    lines
        .iter()
        .map(|line| {
            line.stations()
                .windows(2)
                .map(|w| {
                    let rank = occupants.entry(edge_key(w[0], w[1])).or_insert(0);
                    let lane = lane_for_rank(*rank);
                    *rank += 1;
                    lane
                })
                .collect()
        })
        .collect()
}
