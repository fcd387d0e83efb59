//! Deterministic per-station RNG.
//!
//! # Determinism strategy
//!
//! Each station gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (station_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive station IDs uniformly across the seed space.
//! Stations added mid-session therefore never disturb the rider streams of
//! existing stations, and a replayed action sequence spawns the same riders.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::StationId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-station deterministic RNG, used to draw rider target shapes.
#[derive(Clone, Debug)]
pub struct StationRng(SmallRng);

impl StationRng {
    /// Seed deterministically from the run's global seed and a station ID.
    pub fn new(global_seed: u64, station: StationId) -> Self {
        let seed = global_seed ^ (station.0 as u64).wrapping_mul(MIXING_CONSTANT);
        StationRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
