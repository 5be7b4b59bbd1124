//! Error types for hydraulics calculations.

use thiserror::Error;

/// Errors from the closed-form hydraulics calculators. Only geometrically
/// nonsensical inputs are rejected; zero stroke counts and the like fall
/// back to benign ratios instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;
