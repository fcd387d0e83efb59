//! `ts-output`: CSV export of simulation snapshots.
//!
//! | File                    | One row per                          |
//! |-------------------------|--------------------------------------|
//! | `vehicle_snapshots.csv` | vehicle, at every snapshot tick      |
//! | `station_snapshots.csv` | station, at every snapshot tick      |
//! | `tick_summaries.csv`    | tick                                 |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `ts_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(3600, 1.0 / 60.0, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StationSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
