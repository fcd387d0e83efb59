//! `ts-core`: foundational types for the transit simulation workspace.
//!
//! This crate is a dependency of every other `ts-*` crate.  It has no `ts-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `serde` and `toml` for the config loader).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StationId`, `LineId`, `VehicleId`, `RiderId`         |
//! | [`geo`]         | `Point2` world-space vector                           |
//! | [`shape`]       | `StationShape` (8 shapes), `LineColor` (6 colours)    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `StationRng` (per-station)                            |
//! | [`config`]      | `TransitConfig` + TOML loader                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, geometry and time.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod shape;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TransitConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point2;
pub use ids::{LineId, RiderId, StationId, VehicleId};
pub use rng::StationRng;
pub use shape::{LineColor, StationShape};
pub use time::{SimClock, Tick};
