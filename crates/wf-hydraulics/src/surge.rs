//! Surge/swab tripping-pressure estimation.
//!
//! Single-pass closed form: the Burkhardt clinging factor converts pipe
//! speed into an effective annular mud velocity, and a Bingham-plastic
//! laminar annular friction loss converts that into a pressure change.
//! Running in surges (adds bottom-hole pressure), pulling out swabs
//! (removes it); the result is reported both as a signed pressure delta and
//! as an equivalent circulating density.

use crate::error::{HydraulicsError, HydraulicsResult};
use serde::{Deserialize, Serialize};
use wf_core::units::PSI_PER_FT_PER_PPG;

/// Burkhardt clinging constant for closed-ended pipe in a typical annulus.
const CLINGING_FACTOR: f64 = 0.45;

/// Trip direction flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripDirection {
    /// Running pipe into the hole (surge, pressure increase)
    RunningIn,
    /// Pulling pipe out of the hole (swab, pressure decrease)
    PullingOut,
}

/// Inputs for the surge/swab estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurgeSwabInput {
    pub trip_speed_ft_per_min: f64,
    pub pipe_od_in: f64,
    pub hole_id_in: f64,
    pub well_depth_tvd_ft: f64,
    pub mud_weight_ppg: f64,
    /// Plastic viscosity in cP
    pub plastic_viscosity_cp: f64,
    /// Yield point in lbf/100 ft2
    pub yield_point_lbf_100ft2: f64,
    pub direction: TripDirection,
}

/// Estimated tripping transient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurgeSwabResult {
    /// Signed bottom-hole pressure change (positive = surge)
    pub pressure_delta_psi: f64,
    /// Equivalent circulating density seen by the open hole
    pub ecd_ppg: f64,
}

/// Estimate the tripping-induced pressure transient.
pub fn estimate_surge_swab(input: &SurgeSwabInput) -> HydraulicsResult<SurgeSwabResult> {
    let clearance_in = input.hole_id_in - input.pipe_od_in;
    if clearance_in <= 0.0 {
        return Err(HydraulicsError::InvalidGeometry {
            what: "annular clearance must be positive",
        });
    }
    if input.hole_id_in <= 0.0 {
        return Err(HydraulicsError::InvalidGeometry {
            what: "hole diameter must be positive",
        });
    }

    // Effective annular velocity (ft/min): displaced flow plus clinging mud.
    let od2 = input.pipe_od_in * input.pipe_od_in;
    let id2 = input.hole_id_in * input.hole_id_in;
    let velocity_ratio = CLINGING_FACTOR + od2 / (id2 - od2);
    let v_annular = input.trip_speed_ft_per_min.abs() * velocity_ratio;

    // Bingham-plastic laminar annular loss (field-unit form):
    //   dP = [PV*v / (60000*(Dh-Dp)^2) + YP / (200*(Dh-Dp))] * L
    let length = input.well_depth_tvd_ft.max(0.0);
    let friction_psi = (input.plastic_viscosity_cp.max(0.0) * v_annular
        / (60_000.0 * clearance_in * clearance_in)
        + input.yield_point_lbf_100ft2.max(0.0) / (200.0 * clearance_in))
        * length;

    let signed = match input.direction {
        TripDirection::RunningIn => friction_psi,
        TripDirection::PullingOut => -friction_psi,
    };

    let ecd_ppg = if input.well_depth_tvd_ft > 0.0 {
        input.mud_weight_ppg + signed / (PSI_PER_FT_PER_PPG * input.well_depth_tvd_ft)
    } else {
        input.mud_weight_ppg
    };

    Ok(SurgeSwabResult {
        pressure_delta_psi: signed,
        ecd_ppg,
    })
}
