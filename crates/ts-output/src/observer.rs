//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use ts_core::Tick;
use ts_network::VehicleState;
use ts_sim::{SimObserver, SimSnapshot, TickSummary};

use crate::row::{StationSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes vehicle and station snapshots plus tick
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: summary.elapsed_secs,
            period:       summary.period,
            spawned:      summary.spawned as u32,
            arrived:      summary.arrived as u32,
            transferred:  summary.transferred as u32,
            boarded:      summary.boarded as u32,
            waiting:      summary.waiting as u32,
            onboard:      summary.onboard as u32,
            score:        summary.score,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &SimSnapshot<'_>) {
        let tick = snapshot.tick.0;

        let vehicles: Vec<VehicleSnapshotRow> = snapshot
            .vehicles()
            .map(|v| {
                let (docked, station) = match v.state {
                    VehicleState::Docked { station, .. } => (true, station.0),
                    VehicleState::Moving => (false, u32::MAX),
                };
                VehicleSnapshotRow {
                    tick,
                    vehicle_id: v.id.0,
                    line_id:    v.line.0,
                    docked,
                    station_id: station,
                    segment:    v.segment as u32,
                    progress:   v.progress,
                    x:          v.position.x,
                    y:          v.position.y,
                    heading_x:  v.tangent.x,
                    heading_y:  v.tangent.y,
                    passengers: v.passengers as u32,
                    capacity:   v.capacity,
                    color:      snapshot.network.line(v.line).map_or([0; 3], |l| l.color.rgb()),
                }
            })
            .collect();
        if !vehicles.is_empty() {
            let result = self.writer.write_vehicle_snapshots(&vehicles);
            self.store_err(result);
        }

        let stations: Vec<StationSnapshotRow> = snapshot
            .stations
            .iter()
            .map(|s| StationSnapshotRow {
                tick,
                station_id: s.id.0,
                shape:      s.shape.as_str(),
                unlocked:   s.unlocked,
                queue_len:  s.queue_len() as u32,
                crowded:    s.queue_len() >= s.crowding_threshold as usize,
            })
            .collect();
        if !stations.is_empty() {
            let result = self.writer.write_station_snapshots(&stations);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _score: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
