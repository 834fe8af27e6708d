use lift_building::{BuildingError, InvariantViolation};
use lift_protocol::ChannelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("controller error: {0}")]
    Controller(#[from] ChannelError),

    #[error("building error: {0}")]
    Building(#[from] BuildingError),

    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

pub type SimResult<T> = Result<T, SimError>;
