//! Sampled line geometry.
//!
//! # Pipeline
//!
//! 1. Lane offsets: each segment is pushed sideways by
//!    `lane * lane_spacing` along the normal of its *undirected* edge
//!    (measured from the lower station id to the higher), so two lines
//!    sharing an edge separate the same way whichever direction they list
//!    it in.
//! 2. Waypoints: each station vertex takes the average offset of the one
//!    or two segments meeting there.
//! 3. Sampling: each span between consecutive waypoints is evaluated as a
//!    uniform Catmull-Rom spline (end tangents use duplicated end points)
//!    at `curve_subdivisions + 1` points.  Cumulative arc length over those
//!    points gives the segment's world length.
//!
//! `position(line, segment, t)` treats `t` as a fraction of *arc length*, so
//! a vehicle advancing `progress` at `speed / segment_length` moves at a
//! constant world speed along the visible curve.

use ts_core::{LineId, Point2, StationId};
use ts_station::StationRegistry;

use crate::lanes::{assign_lanes, edge_key};
use crate::{Line, LineNetwork};

// ── LinePath ──────────────────────────────────────────────────────────────────

/// Sampled geometry of one line.
#[derive(Clone, Debug, Default)]
pub struct LinePath {
    /// Offset-adjusted station positions, one per station.
    pub waypoints: Vec<Point2>,
    /// `samples[segment]`: curve points from the segment start to its end.
    samples: Vec<Vec<Point2>>,
    /// `arc[segment][k]`: cumulative length up to `samples[segment][k]`.
    arc: Vec<Vec<f32>>,
}

impl LinePath {
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.samples.len()
    }

    /// Curve points of `segment`.
    #[inline]
    pub fn samples(&self, segment: usize) -> Option<&[Point2]> {
        self.samples.get(segment).map(Vec::as_slice)
    }

    /// World length of `segment` along the sampled curve.
    #[inline]
    pub fn segment_length(&self, segment: usize) -> Option<f32> {
        self.arc.get(segment).and_then(|a| a.last().copied())
    }

    /// Per-segment world lengths.
    pub fn segment_lengths(&self) -> Vec<f32> {
        self.arc.iter().map(|a| a.last().copied().unwrap_or(0.0)).collect()
    }

    pub fn length(&self) -> f32 {
        self.segment_lengths().iter().sum()
    }

    /// Point at arc-length fraction `t` of `segment`.
    pub fn position(&self, segment: usize, t: f32) -> Option<Point2> {
        let (pts, k, local) = self.locate(segment, t)?;
        if pts.len() == 1 {
            return Some(pts[0]);
        }
        Some(pts[k].lerp(pts[k + 1], local))
    }

    /// Unit direction of travel (towards increasing sequence index) at
    /// fraction `t` of `segment`.
    pub fn tangent(&self, segment: usize, t: f32) -> Option<Point2> {
        let (pts, k, _) = self.locate(segment, t)?;
        let chord = || {
            let a = self.waypoints.get(segment)?;
            let b = self.waypoints.get(segment + 1)?;
            (*b - *a).normalized()
        };
        let local = if pts.len() > 1 { (pts[k + 1] - pts[k]).normalized() } else { None };
        Some(local.or_else(chord).unwrap_or(Point2::new(1.0, 0.0)))
    }

    /// Find the sub-segment `k` holding fraction `t` and the local
    /// interpolation factor inside it.
    fn locate(&self, segment: usize, t: f32) -> Option<(&[Point2], usize, f32)> {
        let pts = self.samples.get(segment)?;
        let arc = &self.arc[segment];
        let total = *arc.last()?;
        if pts.len() < 2 || total <= 0.0 {
            return Some((pts, 0, 0.0));
        }

        let target = t.clamp(0.0, 1.0) * total;
        let k = match arc.iter().position(|&d| d > target) {
            Some(0) => 0,
            Some(i) => i - 1,
            None => arc.len() - 2,
        };
        let span = arc[k + 1] - arc[k];
        let local = if span > 0.0 { ((target - arc[k]) / span).clamp(0.0, 1.0) } else { 0.0 };
        Some((pts, k, local))
    }
}

// ── NetworkGeometry ───────────────────────────────────────────────────────────

/// Sampled paths for every line, indexed by `LineId`.
#[derive(Clone, Debug, Default)]
pub struct NetworkGeometry {
    paths: Vec<LinePath>,
    /// `LineNetwork::revision` this geometry was built from.
    revision: Option<u64>,
}

impl NetworkGeometry {
    /// Sample every line of `network`.
    ///
    /// Station positions come from `stations`; every station on a line must
    /// be registered there.
    pub fn build(
        network:      &LineNetwork,
        stations:     &StationRegistry,
        lane_spacing: f32,
        subdivisions: u32,
    ) -> Self {
        let lanes = assign_lanes(network.lines());
        let paths = network
            .lines()
            .iter()
            .zip(&lanes)
            .map(|(line, line_lanes)| {
                build_path(line, line_lanes, stations, lane_spacing, subdivisions.max(1))
            })
            .collect();
        Self { paths, revision: Some(network.revision()) }
    }

    /// `true` if built from `network`'s current topology.
    #[inline]
    pub fn is_current(&self, network: &LineNetwork) -> bool {
        self.revision == Some(network.revision())
    }

    #[inline]
    pub fn path(&self, line: LineId) -> Option<&LinePath> {
        self.paths.get(line.index())
    }

    #[inline]
    pub fn position(&self, line: LineId, segment: usize, t: f32) -> Option<Point2> {
        self.path(line)?.position(segment, t)
    }

    #[inline]
    pub fn tangent(&self, line: LineId, segment: usize, t: f32) -> Option<Point2> {
        self.path(line)?.tangent(segment, t)
    }

    #[inline]
    pub fn segment_length(&self, line: LineId, segment: usize) -> Option<f32> {
        self.path(line)?.segment_length(segment)
    }
}

fn build_path(
    line:         &Line,
    lanes:        &[i32],
    stations:     &StationRegistry,
    spacing:      f32,
    subdivisions: u32,
) -> LinePath {
    let ids = line.stations();
    let centres: Vec<Point2> = ids
        .iter()
        .map(|&id| {
            debug_assert!(stations.contains(id), "line references unknown {id}");
            stations.pos(id).unwrap_or_default()
        })
        .collect();

    // Per-segment sideways offset.
    let seg_offsets: Vec<Point2> = ids
        .windows(2)
        .zip(lanes)
        .map(|(w, &lane)| segment_offset(w[0], w[1], stations, lane, spacing))
        .collect();

    // Vertex offset: average of adjoining segment offsets.
    let waypoints: Vec<Point2> = centres
        .iter()
        .enumerate()
        .map(|(j, &c)| {
            let before = j.checked_sub(1).and_then(|i| seg_offsets.get(i));
            let after = seg_offsets.get(j);
            let offset = match (before, after) {
                (Some(&a), Some(&b)) => (a + b) * 0.5,
                (Some(&a), None) | (None, Some(&a)) => a,
                (None, None) => Point2::ZERO,
            };
            c + offset
        })
        .collect();

    let mut samples = Vec::with_capacity(waypoints.len().saturating_sub(1));
    let mut arc = Vec::with_capacity(samples.capacity());
    let last = waypoints.len().saturating_sub(1);
    for i in 0..last {
        let p0 = waypoints[i.saturating_sub(1)];
        let p1 = waypoints[i];
        let p2 = waypoints[i + 1];
        let p3 = waypoints[(i + 2).min(last)];

        let pts: Vec<Point2> = (0..=subdivisions)
            .map(|k| catmull_rom(p0, p1, p2, p3, k as f32 / subdivisions as f32))
            .collect();
        let mut cum = Vec::with_capacity(pts.len());
        let mut acc = 0.0;
        cum.push(0.0);
        for w in pts.windows(2) {
            acc += w[0].distance(w[1]);
            cum.push(acc);
        }
        samples.push(pts);
        arc.push(cum);
    }

    LinePath { waypoints, samples, arc }
}

/// Offset vector of the `a`–`b` segment for `lane`.
fn segment_offset(
    a:        StationId,
    b:        StationId,
    stations: &StationRegistry,
    lane:     i32,
    spacing:  f32,
) -> Point2 {
    if lane == 0 {
        return Point2::ZERO;
    }
    let (lo, hi) = edge_key(a, b);
    let (Some(p_lo), Some(p_hi)) = (stations.pos(lo), stations.pos(hi)) else {
        return Point2::ZERO;
    };
    match (p_hi - p_lo).normalized() {
        Some(dir) => dir.perp() * (lane as f32 * spacing),
        None => Point2::ZERO,
    }
}

/// Uniform Catmull-Rom point between `p1` (t = 0) and `p2` (t = 1).
pub(crate) fn catmull_rom(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f32) -> Point2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let a = p1 * 2.0;
    let b = p2 - p0;
    let c = p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3;
    let d = p1 * 3.0 - p0 - p2 * 3.0 + p3;
    (a + b * t + c * t2 + d * t3) * 0.5
}
