//! Core error type.
//!
//! Gameplay operations never return errors: a rejected connection or an
//! empty stock is a normal `false`/`None`.  `CoreError` covers configuration
//! and lookup faults only.

use thiserror::Error;

use crate::{LineId, StationId, VehicleId};

/// The top-level error type for `ts-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("line {0} not found")]
    LineNotFound(LineId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ts-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
