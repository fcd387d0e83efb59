//! Simulation observer trait for progress reporting and data collection.

use ts_core::{StationId, Tick};
use ts_mobility::DockReport;
use ts_station::{Rider, SpawnEvent};

use crate::{SimSnapshot, TickSummary};

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and the run
/// helpers at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(u64);
///
/// impl SimObserver for Deliveries {
///     fn on_rider_arrived(&mut self, _tick: Tick, _rider: &Rider, _at: StationId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per rider appended to a station queue by its timer.
    fn on_rider_spawned(&mut self, _tick: Tick, _event: &SpawnEvent) {}

    /// Called once per rider exchange, after it has been applied.
    fn on_dock(&mut self, _tick: Tick, _report: &DockReport) {}

    /// Called for every delivered rider, after it has been scored.
    fn on_rider_arrived(&mut self, _tick: Tick, _rider: &Rider, _station: StationId) {}

    /// Called by [`Sim::advance_period`][crate::Sim::advance_period] with the
    /// new period and the stations it actually unlocked.
    fn on_period_advanced(&mut self, _tick: Tick, _period: u32, _unlocked: &[StationId]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to stations, lines and vehicles.
    fn on_snapshot(&mut self, _snapshot: &SimSnapshot<'_>) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _score: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
