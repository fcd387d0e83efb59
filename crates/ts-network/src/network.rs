//! `LineNetwork`: the set of lines, their vehicles and the resource stock.
//!
//! # Connection rules
//!
//! * A colour with no line yet: `try_connect(a, b, c)` creates `[a, b]` if
//!   the line cap allows another line and a vehicle unit is in stock, then
//!   spawns the line's first vehicle from that unit.
//! * A colour with a line: the connection must extend it at an endpoint:
//!   one station is the current first (prepend) or last (append) and the
//!   other is not on the line yet.  Everything else is rejected, including
//!   closing a loop between the two endpoints.
//!
//! Rejections are ordinary `false` returns; nothing here is an error.

use ts_core::{LineColor, LineId, StationId, TransitConfig, VehicleId};

use crate::{Line, ResourceStock, Vehicle};

pub struct LineNetwork {
    lines: Vec<Line>,
    by_color: [Option<LineId>; LineColor::COUNT],
    vehicles: Vec<Vehicle>,

    /// Resource pools consumed by player actions.
    pub stock: ResourceStock,

    vehicle_capacity: u32,
    capacity_increment: u32,
    dock_duration: f32,

    /// Bumped on every change to a station sequence.
    revision: u64,
}

impl LineNetwork {
    pub fn new(config: &TransitConfig) -> Self {
        Self {
            lines: Vec::new(),
            by_color: [None; LineColor::COUNT],
            vehicles: Vec::new(),
            stock: ResourceStock::from_config(config),
            vehicle_capacity: config.vehicle_capacity,
            capacity_increment: config.capacity_increment,
            dock_duration: config.dock_duration_secs,
            revision: 0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// All lines, in creation order (`LineId` order).
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[inline]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.index())
    }

    #[inline]
    pub fn line_by_color(&self, color: LineColor) -> Option<&Line> {
        self.by_color[color.index()].and_then(|id| self.line(id))
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    /// Split borrow for the mobility engine: lines read-only, vehicles
    /// mutable.
    #[inline]
    pub fn split_mut(&mut self) -> (&[Line], &mut [Vehicle]) {
        (&self.lines, &mut self.vehicles)
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of distinct lines whose sequence includes `station`.
    pub fn lines_serving(&self, station: StationId) -> usize {
        self.lines.iter().filter(|l| l.contains(station)).count()
    }

    // ── Line creation and extension ───────────────────────────────────────

    /// Connect `a` and `b` with `color`, creating or extending that colour's
    /// line.  Returns `true` if the network changed.
    pub fn try_connect(&mut self, a: StationId, b: StationId, color: LineColor) -> bool {
        self.try_connect_with_tunnels(a, b, color, 0)
    }

    /// Like [`try_connect`](Self::try_connect) for a connection that needs
    /// `tunnels` crossings.  Fails without side effects unless the tunnel
    /// stock covers them; consumes them on success.
    pub fn try_connect_with_tunnels(
        &mut self,
        a:       StationId,
        b:       StationId,
        color:   LineColor,
        tunnels: u32,
    ) -> bool {
        if a == b || a == StationId::INVALID || b == StationId::INVALID {
            return false;
        }
        if self.stock.tunnels < tunnels {
            return false;
        }

        let connected = match self.by_color[color.index()] {
            None => self.create_line(a, b, color).is_some(),
            Some(id) => self.extend_line(id, a, b),
        };
        if connected {
            let took = self.stock.take_tunnels(tunnels);
            debug_assert!(took);
        }
        connected
    }

    fn create_line(&mut self, a: StationId, b: StationId, color: LineColor) -> Option<LineId> {
        if self.lines.len() >= self.stock.line_cap as usize {
            return None;
        }
        if self.stock.vehicles == 0 {
            return None;
        }

        let id = LineId(self.lines.len() as u32);
        self.lines.push(Line::new(id, color, a, b));
        self.by_color[color.index()] = Some(id);
        self.revision += 1;

        let vehicle = self.spawn_vehicle(id, true);
        debug_assert!(vehicle.is_some());
        tracing::debug!(line = %id, %color, %a, %b, "line created");
        Some(id)
    }

    fn extend_line(&mut self, id: LineId, a: StationId, b: StationId) -> bool {
        let line = &self.lines[id.index()];
        let (first, last) = (line.first(), line.last());
        let a_on = line.contains(a);
        let b_on = line.contains(b);

        // Exactly one of the two may already be on the line, and it must be
        // an endpoint.
        let (anchor, fresh) = match (a_on, b_on) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            _ => return false,
        };

        if anchor == first {
            let line = &mut self.lines[id.index()];
            line.stations.insert(0, fresh);
            // Everything shifts one segment further along the sequence.
            for vid in &line.vehicles {
                self.vehicles[vid.index()].segment += 1;
            }
        } else if anchor == last {
            self.lines[id.index()].stations.push(fresh);
        } else {
            return false;
        }

        self.revision += 1;
        tracing::debug!(line = %id, station = %fresh, at = if anchor == first { "front" } else { "back" }, "line extended");
        true
    }

    // ── Mid-line insertion ────────────────────────────────────────────────

    /// Splice `station` into `line` between `stations[segment]` and
    /// `stations[segment + 1]`, at fraction `t` of that segment.
    ///
    /// Vehicles keep their place along the line: those past the split move
    /// to the later sub-segment and progress is rescaled into whichever
    /// half they occupy.
    pub fn insert_station(
        &mut self,
        line:    LineId,
        segment: usize,
        station: StationId,
        t:       f32,
    ) -> bool {
        let Some(l) = self.lines.get(line.index()) else {
            return false;
        };
        if segment >= l.segment_count() || l.contains(station) || station == StationId::INVALID {
            return false;
        }
        if !(t > 0.0 && t < 1.0) {
            return false;
        }

        let l = &mut self.lines[line.index()];
        l.stations.insert(segment + 1, station);

        for vid in &l.vehicles {
            let v = &mut self.vehicles[vid.index()];
            if v.segment > segment {
                v.segment += 1;
            } else if v.segment == segment {
                if v.progress < t {
                    v.progress /= t;
                } else {
                    v.segment += 1;
                    v.progress = ((v.progress - t) / (1.0 - t)).clamp(0.0, 1.0);
                }
            }
        }

        self.revision += 1;
        tracing::debug!(%line, %station, segment, t, "station inserted");
        true
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    /// Put a new vehicle on `line`, docked at its first station.
    ///
    /// With `consume_stock` the spawn takes one vehicle unit and fails when
    /// none is left.
    pub fn spawn_vehicle(&mut self, line: LineId, consume_stock: bool) -> Option<VehicleId> {
        let first = self.lines.get(line.index())?.first();
        if consume_stock && !self.stock.take_vehicle() {
            return None;
        }

        let id = VehicleId(self.vehicles.len() as u32);
        self.vehicles.push(Vehicle::new(id, line, first, self.vehicle_capacity, self.dock_duration));
        self.lines[line.index()].vehicles.push(id);
        tracing::debug!(%line, vehicle = %id, "vehicle spawned");
        Some(id)
    }

    /// Raise `vehicle`'s capacity by the configured increment, consuming
    /// one upgrade unit.
    pub fn try_upgrade_vehicle_capacity(&mut self, vehicle: VehicleId) -> bool {
        if vehicle.index() >= self.vehicles.len() || !self.stock.take_upgrade() {
            return false;
        }
        let v = &mut self.vehicles[vehicle.index()];
        v.capacity = v.capacity.saturating_add(self.capacity_increment);
        tracing::debug!(%vehicle, capacity = v.capacity, "vehicle upgraded");
        true
    }

    // ── Stock ─────────────────────────────────────────────────────────────

    pub fn add_vehicle_stock(&mut self, n: u32) {
        self.stock.add_vehicles(n);
    }

    pub fn add_upgrade_stock(&mut self, n: u32) {
        self.stock.add_upgrades(n);
    }

    pub fn add_tunnel_stock(&mut self, n: u32) {
        self.stock.add_tunnels(n);
    }

    pub fn increase_line_cap(&mut self) -> bool {
        self.stock.raise_line_cap()
    }
}
