//! `ts-sim`: the simulation context and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! step(dt):
//!   ① Geometry: rebuild line paths if the network changed.
//!   ② Spawns:   every unlocked station advances its spawn timer using the
//!                current period's interval.
//!   ③ Vehicles: MobilityEngine moves, docks and departs every vehicle in
//!                VehicleId order; each dock runs the TransportPolicy once.
//!   ④ Scoring:  delivered riders are counted and dropped.
//!   ⑤ Clock:    advance tick and simulated seconds.
//! ```
//!
//! All player and game-loop actions (`try_connect`, `insert_station`,
//! `spawn_vehicle`, stock grants, `advance_period`, …) go through [`Sim`].
//! They return `bool` / `Option` and never error.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ts_core::{LineColor, Point2, StationId, StationShape, TransitConfig};
//! use ts_policy::ReachabilityPolicy;
//! use ts_sim::{NoopObserver, SimBuilder};
//! use ts_station::StationSpec;
//!
//! let mut sim = SimBuilder::new(TransitConfig::default(), ReachabilityPolicy)
//!     .station(StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)))
//!     .station(StationSpec::new(StationShape::Square, Point2::new(120.0, 0.0)))
//!     .build()?;
//! sim.try_connect(StationId(0), StationId(1), LineColor::Red);
//! sim.run_ticks(600, 1.0 / 60.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod view;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use view::{QueuedRider, SimSnapshot, TickSummary, VehicleView};
