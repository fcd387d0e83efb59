//! `ts-station`: stations, their rider queues and periodic rider spawning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`rider`]    | `Rider`, `RiderState`                                      |
//! | [`station`]  | `Station`: shape, lock state and FIFO rider queue         |
//! | [`registry`] | `StationRegistry`: dense `StationId`-indexed storage      |
//! | [`spawner`]  | spawn timers and target-shape selection                    |
//!
//! A station's queue length is the only signal the outer game loop reads to
//! decide overcrowding; stations never act on their own thresholds.

pub mod registry;
pub mod rider;
pub mod spawner;
pub mod station;

#[cfg(test)]
mod tests;

pub use registry::{StationRegistry, StationSpec};
pub use rider::{Rider, RiderState};
pub use spawner::SpawnEvent;
pub use station::Station;
