//! The `Sim` struct, its tick loop and the external control surface.

use ts_core::{LineColor, LineId, RiderId, SimClock, StationId, StationShape, Tick, TransitConfig, VehicleId};
use ts_mobility::MobilityEngine;
use ts_network::{Line, LineNetwork, NetworkGeometry, ResourceStock};
use ts_policy::TransportPolicy;
use ts_route::{can_reach, ReachMode, Target};
use ts_station::{Station, StationRegistry, StationSpec};

use crate::view::queue_view;
use crate::{QueuedRider, SimObserver, SimResult, SimSnapshot, TickSummary, VehicleView};

/// One running session: stations, lines, vehicles, clock and score.
///
/// `Sim<P>` is the single context every component reads and writes through;
/// there is no global state.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: TransportPolicy> {
    /// Tunables supplied by the game loop.
    pub config: TransitConfig,

    /// Tick counter, simulated seconds and current period.
    pub clock: SimClock,

    stations: StationRegistry,
    network: LineNetwork,

    /// Sampled line paths, rebuilt whenever `network.revision()` moves.
    geometry: NetworkGeometry,

    /// Vehicle state machine and the docking policy.
    pub mobility: MobilityEngine<P>,

    score: u64,
}

impl<P: TransportPolicy> Sim<P> {
    pub(crate) fn from_parts(
        config:   TransitConfig,
        stations: StationRegistry,
        network:  LineNetwork,
        policy:   P,
    ) -> Self {
        let mobility = MobilityEngine::new(policy, &config);
        let mut sim = Self {
            config,
            clock: SimClock::new(),
            stations,
            network,
            geometry: NetworkGeometry::default(),
            mobility,
            score: 0,
        };
        sim.refresh_geometry();
        sim
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the whole simulation by one tick of `dt` seconds.
    pub fn step<O: SimObserver>(&mut self, dt: f32, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.refresh_geometry();

        // ── Spawns ────────────────────────────────────────────────────────
        let interval = self.config.spawn_interval_for(self.clock.period);
        let spawns = self.stations.tick_spawns(dt, interval, now);
        for event in &spawns {
            observer.on_rider_spawned(now, event);
        }

        // ── Vehicles ──────────────────────────────────────────────────────
        let reports = self.mobility.tick(&mut self.network, &self.geometry, &mut self.stations, dt)?;

        let mut summary = TickSummary { tick: now, spawned: spawns.len(), ..TickSummary::default() };
        for report in &reports {
            summary.transferred += report.transferred.len();
            summary.boarded += report.boarded.len();
            observer.on_dock(now, report);
            for rider in &report.arrived {
                self.score += 1;
                summary.arrived += 1;
                observer.on_rider_arrived(now, rider, report.station);
            }
        }

        // ── Clock ─────────────────────────────────────────────────────────
        self.clock.advance(dt);

        summary.elapsed_secs = self.clock.elapsed_secs;
        summary.period = self.clock.period;
        summary.waiting = self.stations.total_waiting();
        summary.onboard = self.network.vehicles().iter().map(|v| v.passenger_count()).sum();
        summary.score = self.score;
        observer.on_tick_end(now, &summary);

        let every = self.config.snapshot_interval_ticks;
        if every > 0 && now.0.is_multiple_of(every) {
            observer.on_snapshot(&self.snapshot(now));
        }
        Ok(())
    }

    /// Run exactly `n` ticks of `dt` seconds from the current position.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, dt: f32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(dt, observer)?;
        }
        Ok(())
    }

    /// Like [`run_ticks`](Self::run_ticks), then report the end of the run.
    pub fn run<O: SimObserver>(&mut self, n: u64, dt: f32, observer: &mut O) -> SimResult<()> {
        self.run_ticks(n, dt, observer)?;
        let (min, sec) = self.clock.elapsed_ms();
        tracing::info!(tick = %self.clock.current_tick, score = self.score, "run finished after {min}m{sec:02}s");
        observer.on_sim_end(self.clock.current_tick, self.score);
        Ok(())
    }

    // ── Line network actions ──────────────────────────────────────────────

    /// Connect two registered stations with `color`, creating or extending
    /// that colour's line.
    pub fn try_connect(&mut self, a: StationId, b: StationId, color: LineColor) -> bool {
        self.try_connect_with_tunnels(a, b, color, 0)
    }

    /// [`try_connect`](Self::try_connect) for a connection crossing
    /// `tunnels` water spans.
    pub fn try_connect_with_tunnels(
        &mut self,
        a:       StationId,
        b:       StationId,
        color:   LineColor,
        tunnels: u32,
    ) -> bool {
        if !self.stations.contains(a) || !self.stations.contains(b) {
            return false;
        }
        let ok = self.network.try_connect_with_tunnels(a, b, color, tunnels);
        if ok {
            self.refresh_geometry();
        }
        ok
    }

    /// Splice `station` into `line` after `segment`, at fraction `t`.
    pub fn insert_station(&mut self, line: LineId, segment: usize, station: StationId, t: f32) -> bool {
        if !self.stations.contains(station) {
            return false;
        }
        let ok = self.network.insert_station(line, segment, station, t);
        if ok {
            self.refresh_geometry();
        }
        ok
    }

    pub fn spawn_vehicle(&mut self, line: LineId, consume_stock: bool) -> Option<VehicleId> {
        self.network.spawn_vehicle(line, consume_stock)
    }

    pub fn try_upgrade_vehicle_capacity(&mut self, vehicle: VehicleId) -> bool {
        self.network.try_upgrade_vehicle_capacity(vehicle)
    }

    // ── Resource grants ───────────────────────────────────────────────────

    pub fn add_vehicle_stock(&mut self, n: u32) {
        self.network.add_vehicle_stock(n);
    }

    pub fn add_upgrade_stock(&mut self, n: u32) {
        self.network.add_upgrade_stock(n);
    }

    pub fn add_tunnel_stock(&mut self, n: u32) {
        self.network.add_tunnel_stock(n);
    }

    pub fn increase_line_cap(&mut self) -> bool {
        self.network.increase_line_cap()
    }

    // ── Stations and periods ──────────────────────────────────────────────

    /// Register a new station while running.
    pub fn add_station(&mut self, spec: StationSpec) -> StationId {
        self.stations.add_station(spec)
    }

    /// Open a locked station so it spawns riders and counts as a target.
    pub fn unlock_station(&mut self, station: StationId) -> bool {
        self.stations.unlock(station)
    }

    /// Put a rider bound for `shape` in `station`'s queue now, outside the
    /// spawn timer.
    pub fn spawn_rider(&mut self, station: StationId, shape: StationShape) -> Option<RiderId> {
        self.stations.spawn_rider_to(station, shape, self.clock.current_tick)
    }

    /// Move to the next period and unlock `unlocks`.
    ///
    /// The new period selects the spawn interval from then on.  Returns the
    /// new period.
    pub fn advance_period<O: SimObserver>(&mut self, unlocks: &[StationId], observer: &mut O) -> u32 {
        let period = self.clock.advance_period();
        let unlocked: Vec<StationId> =
            unlocks.iter().copied().filter(|&s| self.stations.unlock(s)).collect();
        tracing::info!(period, unlocked = unlocked.len(), "period advanced");
        observer.on_period_advanced(self.clock.current_tick, period, &unlocked);
        period
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn lines(&self) -> &[Line] {
        self.network.lines()
    }

    #[inline]
    pub fn line_by_color(&self, color: LineColor) -> Option<&Line> {
        self.network.line_by_color(color)
    }

    #[inline]
    pub fn stock(&self) -> &ResourceStock {
        &self.network.stock
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn stations(&self) -> &StationRegistry {
        &self.stations
    }

    #[inline]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    #[inline]
    pub fn network(&self) -> &LineNetwork {
        &self.network
    }

    #[inline]
    pub fn geometry(&self) -> &NetworkGeometry {
        &self.geometry
    }

    /// Position, heading and load of `vehicle`.
    pub fn vehicle_view(&self, vehicle: VehicleId) -> Option<VehicleView> {
        VehicleView::of(self.network.vehicle(vehicle)?, &self.geometry)
    }

    /// Waiting riders at `station`, front first.
    pub fn station_queue(&self, station: StationId) -> Option<Vec<QueuedRider>> {
        self.stations.get(station).map(queue_view)
    }

    /// Raw queue length, the overcrowding signal read by the game loop.
    pub fn queue_len(&self, station: StationId) -> Option<usize> {
        self.stations.get(station).map(Station::queue_len)
    }

    /// `true` if a rider at `start` could reach an unlocked station of
    /// `shape` over the current lines.
    pub fn can_reach(&self, start: StationId, shape: StationShape) -> bool {
        can_reach(start, Target::Shape(shape), ReachMode::UnlockedOnly, self.network.lines(), &self.stations)
    }

    /// Borrow everything an output writer needs for tick `tick`.
    pub fn snapshot(&self, tick: Tick) -> SimSnapshot<'_> {
        SimSnapshot {
            tick,
            clock:    &self.clock,
            stations: &self.stations,
            network:  &self.network,
            geometry: &self.geometry,
        }
    }

    fn refresh_geometry(&mut self) {
        if !self.geometry.is_current(&self.network) {
            self.geometry = NetworkGeometry::build(
                &self.network,
                &self.stations,
                self.config.lane_spacing,
                self.config.curve_subdivisions,
            );
        }
    }
}
