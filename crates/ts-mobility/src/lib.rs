//! `ts-mobility`: the per-vehicle Moving / Docked state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`engine`] | `MobilityEngine<P>`, `vehicle_pose`                        |
//! | [`report`] | `DockReport`, `Pose`                                       |
//! | [`error`]  | `MobilityError`, `MobilityResult<T>`                       |
//!
//! # Vehicle cycle
//!
//! 1. **Moving**: `progress` advances by `speed * dt / segment_length` in
//!    the vehicle's direction, where the length is the sampled curve
//!    length from `NetworkGeometry`.  Reaching 0 or 1 clamps and docks at
//!    the station on that end, remembering the arrival direction.
//! 2. **Docked**: the rider exchange runs once, in the tick the vehicle
//!    docks.  The `processed` flag guards re-entry.  The dock timer then
//!    counts down.
//! 3. **Departure**: at the line's first station the vehicle heads forward,
//!    at the last station backward, elsewhere it keeps its arrival
//!    direction.
//!
//! A new vehicle starts docked at its line's first station, so its first
//! exchange happens before it moves.

pub mod engine;
pub mod error;
pub mod report;

#[cfg(test)]
mod tests;

pub use engine::{vehicle_pose, MobilityEngine};
pub use error::{MobilityError, MobilityResult};
pub use report::{DockReport, Pose};
