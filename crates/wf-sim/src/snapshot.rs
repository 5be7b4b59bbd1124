//! Output records produced by the migration models.
//!
//! One immutable snapshot per recorded time step, plus a run-level summary.
//! Field names carry units so the serialized JSON is self-describing for the
//! reporting layer that consumes these records.

use serde::{Deserialize, Serialize};

/// Physical state observable at one recorded time step.
///
/// The density profile and gas-mass proxy are populated by the multiphase
/// model; the single-bubble model leaves the profile empty and carries its
/// conserved P·V/(Z·T) constant in `gas_mass_proxy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeStepSnapshot {
    pub time_min: f64,
    pub casing_pressure_psi: f64,
    pub drillpipe_pressure_psi: f64,
    pub kick_top_tvd_ft: f64,
    pub kick_volume_bbl: f64,
    pub max_gas_velocity_ft_per_min: f64,
    pub max_holdup: f64,
    /// Mixture density per cell (lb/ft3), surface cell first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mixture_density_profile: Vec<f64>,
    /// Sum of holdup * cell volume * P/(Z*T), a mole-count proxy used to
    /// check approximate mass conservation of the explicit scheme
    pub gas_mass_proxy: f64,
}

/// Run-level statistics over all snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub max_casing_pressure_psi: f64,
    /// First minute at which the kick top reaches surface; None if the kick
    /// stays downhole for the whole horizon
    pub surface_arrival_min: Option<f64>,
}

/// Full result of one migration simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickMigrationRun {
    pub snapshots: Vec<TimeStepSnapshot>,
    pub summary: SimulationSummary,
}
