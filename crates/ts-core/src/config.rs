//! Tunable parameters supplied by the game loop.
//!
//! Typically loaded from a TOML file by the application and handed to
//! `SimBuilder`.  Every field has a default, so a config file only needs to
//! name the values it overrides:
//!
//! ```toml
//! seed = 7
//! vehicle_speed = 80.0
//! spawn_interval_secs = [5.0, 4.0, 3.0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, LineColor};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitConfig {
    /// Master RNG seed.  The same seed and action sequence always produce
    /// identical results.
    pub seed: u64,

    /// Vehicle cruising speed in world units per second.
    pub vehicle_speed: f32,

    /// Seconds a vehicle stays docked at every station.
    pub dock_duration_secs: f32,

    /// Passenger capacity of a freshly spawned vehicle.
    pub vehicle_capacity: u32,

    /// Capacity added by one upgrade unit.
    pub capacity_increment: u32,

    /// Soft per-station queue limit.  Exposed to the game loop, never
    /// enforced by the stations themselves.
    pub queue_capacity: u32,

    /// Queue length at which the game loop treats a station as crowded.
    pub crowding_threshold: u32,

    /// Rider spawn interval per period (week), in seconds.  Periods past the
    /// end of the list reuse the last entry.
    pub spawn_interval_secs: Vec<f32>,

    /// Perpendicular distance between parallel lanes on a shared segment.
    pub lane_spacing: f32,

    /// Sub-segments sampled per station-to-station span.
    pub curve_subdivisions: u32,

    /// Initial maximum number of lines.
    pub initial_line_cap: u32,

    pub initial_vehicle_stock: u32,
    pub initial_upgrade_stock: u32,
    pub initial_tunnel_stock: u32,

    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            vehicle_speed:           60.0,
            dock_duration_secs:      1.0,
            vehicle_capacity:        6,
            capacity_increment:      6,
            queue_capacity:          6,
            crowding_threshold:      10,
            spawn_interval_secs:     vec![6.0, 5.0, 4.0, 3.5, 3.0],
            lane_spacing:            6.0,
            curve_subdivisions:      8,
            initial_line_cap:        3,
            initial_vehicle_stock:   3,
            initial_upgrade_stock:   0,
            initial_tunnel_stock:    0,
            snapshot_interval_ticks: 60,
        }
    }
}

impl TransitConfig {
    /// Parse a TOML document.  Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: TransitConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.vehicle_speed > 0.0) {
            return Err(CoreError::Config("vehicle_speed must be positive".into()));
        }
        if self.dock_duration_secs < 0.0 {
            return Err(CoreError::Config("dock_duration_secs must not be negative".into()));
        }
        if self.vehicle_capacity == 0 {
            return Err(CoreError::Config("vehicle_capacity must be at least 1".into()));
        }
        if self.spawn_interval_secs.is_empty() {
            return Err(CoreError::Config("spawn_interval_secs must not be empty".into()));
        }
        if self.spawn_interval_secs.iter().any(|&s| !(s > 0.0)) {
            return Err(CoreError::Config("spawn intervals must be positive".into()));
        }
        if self.lane_spacing < 0.0 {
            return Err(CoreError::Config("lane_spacing must not be negative".into()));
        }
        if self.curve_subdivisions == 0 {
            return Err(CoreError::Config("curve_subdivisions must be at least 1".into()));
        }
        if self.initial_line_cap as usize > LineColor::COUNT {
            return Err(CoreError::Config(format!(
                "initial_line_cap {} exceeds the {} available colours",
                self.initial_line_cap,
                LineColor::COUNT,
            )));
        }
        Ok(())
    }

    /// Spawn interval for `period`; periods past the end reuse the last entry.
    pub fn spawn_interval_for(&self, period: u32) -> f32 {
        let idx = (period as usize).min(self.spawn_interval_secs.len().saturating_sub(1));
        self.spawn_interval_secs.get(idx).copied().unwrap_or(f32::INFINITY)
    }
}
