//! Transient kick-migration simulation for shut-in wells.
//!
//! Provides:
//! - Single-bubble migration model (one gas slug, constant rise rate,
//!   conserved bottom-hole pressure)
//! - Multiphase drift-flux migration model (cell-discretized two-phase
//!   transport with the Zuber–Findlay slip closure)
//! - Shared well geometry / fluid system input types
//! - Per-step snapshot records and run summaries
//!
//! Both models are pure functions over explicit inputs: no global state, no
//! I/O, no wall-clock dependence. The same inputs always produce the same
//! snapshot sequence, and nothing here blocks or suspends; the outer time
//! loop is a bounded synchronous iteration.

pub mod drift_flux;
pub mod error;
pub mod single_bubble;
pub mod snapshot;
pub mod well;

// Re-exports for public API
pub use drift_flux::{simulate_drift_flux, DriftFluxInput};
pub use error::{SimError, SimResult};
pub use single_bubble::{simulate_single_bubble, SingleBubbleInput};
pub use snapshot::{KickMigrationRun, SimulationSummary, TimeStepSnapshot};
pub use well::{FluidSystem, WellGeometry};
