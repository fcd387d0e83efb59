use ts_core::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("geometry is stale: network is at revision {0}")]
    StaleGeometry(u64),

    #[error("vehicle docked at unregistered station {0}")]
    StationNotFound(StationId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
