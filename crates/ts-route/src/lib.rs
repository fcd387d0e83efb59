//! `ts-route`: "can a rider get there from here?"
//!
//! The route graph is never stored.  Every query takes the current slice of
//! lines and walks the union of their edges, so a station that appears on
//! several lines is automatically a transfer point and no cached graph can
//! go stale while players edit the network.
//!
//! Only existence is answered; no distances or paths are produced.

pub mod reach;

#[cfg(test)]
mod tests;

pub use reach::{can_reach, can_reach_shape, is_interchange, line_serves, ReachMode, Target};
