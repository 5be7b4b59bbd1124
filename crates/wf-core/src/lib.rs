//! wf-core: stable foundation for wellflow.
//!
//! Contains:
//! - units (oilfield unit conversion constants and helpers)
//! - numeric (tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use numeric::*;
pub use units::*;
