//! `ts-network`: coloured lines, their vehicles, and line geometry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`line`]     | `Line`: ordered station sequence of one colour              |
//! | [`vehicle`]  | `Vehicle`, `VehicleState`, `Direction`                       |
//! | [`stock`]    | `ResourceStock`: vehicle / upgrade / tunnel counters        |
//! | [`network`]  | `LineNetwork`: create, extend, insert, spawn, upgrade       |
//! | [`lanes`]    | parallel-lane assignment by creation order                   |
//! | [`geometry`] | `NetworkGeometry`: Catmull-Rom sampled paths per line       |
//!
//! # Ownership
//!
//! `LineNetwork` owns every line and every vehicle in dense vectors indexed
//! by `LineId` / `VehicleId`.  Lines list their vehicles by id and vehicles
//! store their line's id, so there are no reference cycles.
//!
//! Geometry is derived data.  `LineNetwork::revision` increases on every
//! topology change; `NetworkGeometry::is_current` compares revisions so the
//! owner knows when to rebuild.

pub mod geometry;
pub mod lanes;
pub mod line;
pub mod network;
pub mod stock;
pub mod vehicle;


pub use geometry::{LinePath, NetworkGeometry};
pub use lanes::{assign_lanes, lane_for_rank};
pub use line::Line;
pub use network::LineNetwork;
pub use stock::ResourceStock;
pub use vehicle::{Direction, Vehicle, VehicleState};
