//! wf-pvt: real-gas PVT behavior for wellflow.
//!
//! Provides:
//! - Standing-type pseudo-critical correlations for natural gas
//! - Dranchuk–Abou-Kassem gas deviation factor (Z-factor)
//! - Real-gas density at wellbore conditions
//!
//! # Architecture
//!
//! `GasEos` is the single shared equation-of-state component; both migration
//! models in `wf-sim` take it as a plain dependency rather than duplicating
//! the correlation. The solver is deliberately infallible: non-physical
//! inputs yield a benign ideal-gas answer instead of an error, because the
//! callers treat Z as a best-effort correction factor.

pub mod density;
pub mod eos;

// Re-exports for ergonomics
pub use density::gas_gradient_psi_per_ft;
pub use eos::{GasEos, PseudoCritical};
