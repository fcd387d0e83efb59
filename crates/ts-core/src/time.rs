//! Simulation time model.
//!
//! # Design
//!
//! The external game loop drives the simulation with variable time steps
//! (`dt` in seconds).  `SimClock` counts steps as an integer `Tick`, keeps the
//! accumulated simulated seconds, and tracks the current *period* (the game
//! loop's "week"), which selects the rider spawn interval.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute step counter: one tick per call to `Sim::step`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Step counter, simulated seconds and current period.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick: advanced by [`SimClock::advance`] each step.
    pub current_tick: Tick,
    /// Total simulated seconds since tick 0.
    pub elapsed_secs: f64,
    /// Current period (week), starting at 0.  Advanced only by the game loop.
    pub period: u32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one step of `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt.max(0.0) as f64;
    }

    /// Move to the next period and return it.
    #[inline]
    pub fn advance_period(&mut self) -> u32 {
        self.period += 1;
        self.period
    }

    /// Break elapsed time into (minutes, seconds) for human-readable logging.
    pub fn elapsed_ms(&self) -> (u64, u32) {
        let total = self.elapsed_secs.max(0.0) as u64;
        (total / 60, (total % 60) as u32)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} (week {} {:02}:{:02})", self.current_tick, self.period, m, s)
    }
}
