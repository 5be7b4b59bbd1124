//! Closed-form well-control hydraulics.
//!
//! Provides:
//! - Kill-circulation stroke scheduler (Driller's Method / Wait-and-Weight)
//! - Surge/swab tripping-pressure estimator (Burkhardt clinging factor +
//!   Bingham-plastic annular friction loss)
//!
//! Everything here is a stateless single-pass calculation sharing the kick
//! pressure vocabulary (SIDPP, ICP, FCP) with `wf-sim` but independent of
//! the migration models.

pub mod error;
pub mod kill;
pub mod surge;

// Re-exports for public API
pub use error::{HydraulicsError, HydraulicsResult};
pub use kill::{build_kill_schedule, KillMethod, KillSchedule, KillScheduleInput, KillSchedulePoint};
pub use surge::{estimate_surge_swab, SurgeSwabInput, SurgeSwabResult, TripDirection};
