use thiserror::Error;

use crate::models::vessel::VesselId;

/// Engine error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The caller passed a value outside the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is not allowed in the vessel's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// No vessel with this id is registered
    #[error("Unknown vessel: {0}")]
    UnknownVessel(VesselId),
}

/// Type alias for Results using SimError
pub type SimResult<T> = Result<T, SimError>;
