//! Error types for simulation operations.

use thiserror::Error;
use wf_core::WfError;

/// Errors encountered while setting up or running a migration simulation.
///
/// Only geometrically nonsensical inputs are reported as errors; physically
/// out-of-range values are clamped to sensible bounds instead (the calling
/// layer owns input validation proper).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<WfError> for SimError {
    fn from(e: WfError) -> Self {
        match e {
            WfError::NonFinite { what, .. } => SimError::NonPhysical { what },
            WfError::InvalidArg { what } => SimError::InvalidArg { what },
            WfError::Invariant { what } => SimError::NonPhysical { what },
        }
    }
}
