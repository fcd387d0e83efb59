//! Integer resource pools.
//!
//! Counters are decremented only on success and never go negative; an
//! empty pool is an ordinary rejected operation.

use ts_core::{LineColor, TransitConfig};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ResourceStock {
    /// Vehicles available to spawn.
    pub vehicles: u32,
    /// Capacity upgrades available.
    pub upgrades: u32,
    /// Tunnel crossings available.
    pub tunnels: u32,
    /// Maximum number of lines, never above the number of colours.
    pub line_cap: u32,
}

impl ResourceStock {
    pub fn from_config(config: &TransitConfig) -> Self {
        Self {
            vehicles: config.initial_vehicle_stock,
            upgrades: config.initial_upgrade_stock,
            tunnels:  config.initial_tunnel_stock,
            line_cap: config.initial_line_cap.min(LineColor::COUNT as u32),
        }
    }

    #[inline]
    pub fn take_vehicle(&mut self) -> bool {
        take(&mut self.vehicles, 1)
    }

    #[inline]
    pub fn take_upgrade(&mut self) -> bool {
        take(&mut self.upgrades, 1)
    }

    #[inline]
    pub fn take_tunnels(&mut self, n: u32) -> bool {
        take(&mut self.tunnels, n)
    }

    pub fn add_vehicles(&mut self, n: u32) {
        self.vehicles = self.vehicles.saturating_add(n);
    }

    pub fn add_upgrades(&mut self, n: u32) {
        self.upgrades = self.upgrades.saturating_add(n);
    }

    pub fn add_tunnels(&mut self, n: u32) {
        self.tunnels = self.tunnels.saturating_add(n);
    }

    /// Allow one more line.  Returns `false` once every colour is allowed.
    pub fn raise_line_cap(&mut self) -> bool {
        if self.line_cap as usize >= LineColor::COUNT {
            return false;
        }
        self.line_cap += 1;
        true
    }
}

fn take(counter: &mut u32, n: u32) -> bool {
    match counter.checked_sub(n) {
        Some(left) => {
            *counter = left;
            true
        }
        None => false,
    }
}
