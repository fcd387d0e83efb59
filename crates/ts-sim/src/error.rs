use ts_core::{CoreError, LineColor, StationId};
use ts_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("station {0} is not registered")]
    UnknownStation(StationId),

    #[error("initial connection {a} - {b} on {color} was rejected")]
    ConnectionRejected {
        a:     StationId,
        b:     StationId,
        color: LineColor,
    },

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
