//! Stroke-indexed pressure schedules for kill circulations.
//!
//! Contract: ICP = SIDPP + slow-circulating-rate loss (SCR); FCP = SCR
//! scaled by the kill/original mud-weight ratio. The drill-pipe endpoints
//! (ICP at start, FCP once kill mud fills the string) are the behaviorally
//! pinned values; the casing-pressure interior uses a heuristic
//! interpolation (0.3 of the ICP-FCP gap during kick displacement) with no
//! physical derivation, not a displacement model.

use crate::error::{HydraulicsError, HydraulicsResult};
use serde::{Deserialize, Serialize};

/// Heuristic casing-pressure interpolation factor across the ICP-FCP gap
/// during the kick-displacement circulation. Only the ICP/FCP endpoints
/// are pinned by the contract.
const CASING_INTERP_FACTOR: f64 = 0.3;

/// Standard kill methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillMethod {
    /// Two circulations: displace the kick with original mud, then pump
    /// kill mud.
    Drillers,
    /// One circulation with kill mud ("wait and weight").
    WaitWeight,
}

/// Inputs for the kill-circulation scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillScheduleInput {
    pub well_depth_tvd_ft: f64,
    pub mud_weight_ppg: f64,
    pub kill_mud_weight_ppg: f64,
    pub sidpp_psi: f64,
    /// Slow-circulating-rate pressure loss at the kill rate
    pub scr_psi: f64,
    pub strokes_to_bit: u32,
    pub strokes_bit_to_surface: u32,
    pub method: KillMethod,
    pub step_size_strokes: u32,
}

/// One point of a stroke-indexed pressure schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KillSchedulePoint {
    pub cumulative_strokes: u32,
    pub pressure_psi: f64,
}

/// Complete kill schedule: parallel drill-pipe and casing sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillSchedule {
    pub icp_psi: f64,
    pub fcp_psi: f64,
    pub total_strokes: u32,
    pub drillpipe: Vec<KillSchedulePoint>,
    pub casing: Vec<KillSchedulePoint>,
}

/// Build the stroke schedule for the requested kill method.
pub fn build_kill_schedule(input: &KillScheduleInput) -> HydraulicsResult<KillSchedule> {
    if !(input.scr_psi.is_finite() && input.sidpp_psi.is_finite()) {
        return Err(HydraulicsError::InvalidArg {
            what: "pressures must be finite",
        });
    }

    let icp = input.sidpp_psi + input.scr_psi;
    // Zero/negative original mud weight falls back to ratio 1.0.
    let weight_ratio = if input.mud_weight_ppg > 0.0 {
        input.kill_mud_weight_ppg / input.mud_weight_ppg
    } else {
        1.0
    };
    let fcp = input.scr_psi * weight_ratio;

    let circulation = input.strokes_to_bit + input.strokes_bit_to_surface;
    let total = match input.method {
        KillMethod::Drillers => 2 * circulation,
        KillMethod::WaitWeight => circulation,
    };

    let step = input.step_size_strokes.max(1);
    let mut drillpipe = Vec::new();
    let mut casing = Vec::new();
    let mut strokes = 0;
    loop {
        drillpipe.push(KillSchedulePoint {
            cumulative_strokes: strokes,
            pressure_psi: drillpipe_pressure(input, icp, fcp, circulation, strokes),
        });
        casing.push(KillSchedulePoint {
            cumulative_strokes: strokes,
            pressure_psi: casing_pressure(input, icp, fcp, circulation, total, strokes),
        });
        if strokes >= total {
            break;
        }
        strokes = (strokes + step).min(total);
    }

    Ok(KillSchedule {
        icp_psi: icp,
        fcp_psi: fcp,
        total_strokes: total,
        drillpipe,
        casing,
    })
}

/// Fraction helper with the zero-stroke fallback: an empty interval is
/// treated as already traversed.
fn fraction(strokes: u32, span: u32) -> f64 {
    if span == 0 {
        1.0
    } else {
        (f64::from(strokes) / f64::from(span)).min(1.0)
    }
}

fn drillpipe_pressure(
    input: &KillScheduleInput,
    icp: f64,
    fcp: f64,
    circulation: u32,
    strokes: u32,
) -> f64 {
    let ramp = |s: u32| icp - (icp - fcp) * fraction(s, input.strokes_to_bit);
    match input.method {
        KillMethod::Drillers => {
            if strokes <= circulation {
                // First circulation: original mud, hold ICP.
                icp
            } else {
                // Second circulation: ICP -> FCP while kill mud fills the
                // string, then hold FCP to the end.
                ramp(strokes - circulation)
            }
        }
        KillMethod::WaitWeight => ramp(strokes),
    }
}

fn casing_pressure(
    input: &KillScheduleInput,
    icp: f64,
    fcp: f64,
    circulation: u32,
    total: u32,
    strokes: u32,
) -> f64 {
    // Descent toward FCP while the kick is displaced, by the 0.3-factor
    // interpolation; afterwards decay linearly to zero as kill mud fills
    // the annulus and the well dies.
    let displaced_end = icp - CASING_INTERP_FACTOR * (icp - fcp);
    match input.method {
        KillMethod::Drillers => {
            if strokes <= circulation {
                icp - CASING_INTERP_FACTOR * (icp - fcp) * fraction(strokes, circulation)
            } else {
                displaced_end * (1.0 - fraction(strokes - circulation, total - circulation))
            }
        }
        KillMethod::WaitWeight => {
            if strokes <= input.strokes_bit_to_surface {
                icp - CASING_INTERP_FACTOR * (icp - fcp)
                    * fraction(strokes, input.strokes_bit_to_surface)
            } else {
                let remaining = total - input.strokes_bit_to_surface;
                displaced_end * (1.0 - fraction(strokes - input.strokes_bit_to_surface, remaining))
            }
        }
    }
}
