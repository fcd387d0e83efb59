//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `station_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StationSnapshotRow, TickSummaryRow, VehicleSnapshotRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    vehicles:  Writer<File>,
    stations:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut vehicles = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        vehicles.write_record([
            "tick", "vehicle_id", "line_id", "docked", "station_id", "segment", "progress",
            "x", "y", "heading_x", "heading_y", "passengers", "capacity", "color",
        ])?;

        let mut stations = Writer::from_path(dir.join("station_snapshots.csv"))?;
        stations.write_record(["tick", "station_id", "shape", "unlocked", "queue_len", "crowded"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "elapsed_secs", "period", "spawned", "arrived", "transferred", "boarded",
            "waiting", "onboard", "score",
        ])?;

        Ok(Self { vehicles, stations, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicle_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.to_string(),
                row.line_id.to_string(),
                (row.docked as u8).to_string(),
                row.station_id.to_string(),
                row.segment.to_string(),
                row.progress.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading_x.to_string(),
                row.heading_y.to_string(),
                row.passengers.to_string(),
                row.capacity.to_string(),
                format!("#{:02x}{:02x}{:02x}", row.color[0], row.color[1], row.color[2]),
            ])?;
        }
        Ok(())
    }

    fn write_station_snapshots(&mut self, rows: &[StationSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                row.tick.to_string(),
                row.station_id.to_string(),
                row.shape.to_owned(),
                (row.unlocked as u8).to_string(),
                row.queue_len.to_string(),
                (row.crowded as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.period.to_string(),
            row.spawned.to_string(),
            row.arrived.to_string(),
            row.transferred.to_string(),
            row.boarded.to_string(),
            row.waiting.to_string(),
            row.onboard.to_string(),
            row.score.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.stations.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
