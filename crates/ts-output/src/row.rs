//! Plain data row types written by output backends.

/// One vehicle at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:       u64,
    pub vehicle_id: u32,
    pub line_id:    u32,
    pub docked:     bool,
    /// Station the vehicle is docked at; `u32::MAX` while moving.
    pub station_id: u32,
    pub segment:    u32,
    pub progress:   f32,
    pub x:          f32,
    pub y:          f32,
    pub heading_x:  f32,
    pub heading_y:  f32,
    pub passengers: u32,
    pub capacity:   u32,
    /// Line display colour, 8-bit RGB.
    pub color:      [u8; 3],
}

/// One station at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSnapshotRow {
    pub tick:       u64,
    pub station_id: u32,
    pub shape:      &'static str,
    pub unlocked:   bool,
    pub queue_len:  u32,
    /// `queue_len >= crowding_threshold`.
    pub crowded:    bool,
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub period:       u32,
    pub spawned:      u32,
    pub arrived:      u32,
    pub transferred:  u32,
    pub boarded:      u32,
    pub waiting:      u32,
    pub onboard:      u32,
    pub score:        u64,
}
