//! Single-bubble kick migration in a shut-in well.
//!
//! One gas slug rises at a constant migration rate. The well is shut in, so
//! bottom-hole pressure is a conserved formation-pressure constraint; casing
//! pressure is re-derived each minute from the hydrostatic balance, and the
//! slug volume follows the real-gas law holding P·V/(Z·T) at its initial
//! value. The volume update uses a single corrective pass (height is
//! recomputed once from the new volume and the casing pressure corrected
//! once), not a fully converged solve.

use crate::error::SimResult;
use crate::snapshot::{KickMigrationRun, SimulationSummary, TimeStepSnapshot};
use crate::well::FluidSystem;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wf_core::numeric::ensure_finite;
use wf_core::units::{hydrostatic_psi, rankine};
use wf_pvt::GasEos;

/// Inputs for the single-bubble model. All fields are plain field-unit
/// scalars so the calling layer can pass primitives straight through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleBubbleInput {
    pub well_depth_tvd_ft: f64,
    pub mud_weight_ppg: f64,
    pub kick_volume_bbl: f64,
    pub kick_gradient_psi_ft: f64,
    pub sidpp_psi: f64,
    pub sicp_psi: f64,
    pub annular_capacity_bbl_per_ft: f64,
    pub time_steps_min: usize,
    pub gas_gravity: f64,
    pub migration_rate_ft_per_hr: f64,
    pub surface_temp_f: f64,
    pub temp_gradient_f_per_100ft: f64,
}

impl Default for SingleBubbleInput {
    fn default() -> Self {
        Self {
            well_depth_tvd_ft: 10_000.0,
            mud_weight_ppg: 10.0,
            kick_volume_bbl: 20.0,
            kick_gradient_psi_ft: 0.1,
            sidpp_psi: 200.0,
            sicp_psi: 350.0,
            annular_capacity_bbl_per_ft: 0.0489,
            time_steps_min: 60,
            gas_gravity: 0.65,
            migration_rate_ft_per_hr: 1000.0,
            surface_temp_f: 80.0,
            temp_gradient_f_per_100ft: 1.0,
        }
    }
}

/// Scalar kick state, mutated once per time step.
struct KickState {
    top_ft: f64,
    height_ft: f64,
    volume_bbl: f64,
}

/// Run the single-bubble migration simulation, one snapshot per minute.
///
/// Fails only for non-finite pressure or mud-weight inputs; degenerate
/// geometry (non-positive depth or annular capacity) yields a flat
/// no-migration result rather than an error, so the calling layer always
/// gets a renderable series.
pub fn simulate_single_bubble(
    input: &SingleBubbleInput,
    eos: &GasEos,
) -> SimResult<KickMigrationRun> {
    ensure_finite(input.sidpp_psi, "sidpp_psi")?;
    ensure_finite(input.sicp_psi, "sicp_psi")?;
    ensure_finite(input.mud_weight_ppg, "mud_weight_ppg")?;

    let tvd = input.well_depth_tvd_ft;
    let capacity = input.annular_capacity_bbl_per_ft;

    if tvd <= 0.0 || capacity <= 0.0 {
        return Ok(flat_run(input));
    }

    let fluid = FluidSystem {
        mud_weight_ppg: input.mud_weight_ppg,
        gas_gravity: input.gas_gravity,
        kick_gradient_psi_ft: input.kick_gradient_psi_ft,
        surface_temp_f: input.surface_temp_f,
        temp_gradient_f_per_100ft: input.temp_gradient_f_per_100ft,
    };

    // Conserved while shut in: formation pressure seen at TVD.
    let bhp = input.sidpp_psi + hydrostatic_psi(input.mud_weight_ppg, tvd);

    let height0 = (input.kick_volume_bbl.max(0.0) / capacity).min(tvd);
    let mut kick = KickState {
        top_ft: (tvd - height0).max(0.0),
        height_ft: height0,
        volume_bbl: input.kick_volume_bbl.max(0.0),
    };

    // Initial gas-law constant P·V/(Z·T), anchored at the kick-top pressure
    // implied by the conserved-BHP balance rather than the raw SICP reading.
    // Every later step derives its kick-top pressure from the same balance,
    // so a consistent anchor keeps that pressure non-increasing as the kick
    // rises and the volume update expansion-only. Snapshot 0 still reports
    // the raw shut-in casing reading.
    let casing0 = casing_for(bhp, &fluid, tvd, kick.top_ft, kick.height_ft);
    let p_top0 = casing0 + hydrostatic_psi(input.mud_weight_ppg, kick.top_ft);
    let t_top0 = fluid.temperature_f_at(kick.top_ft);
    let z0 = eos.z_factor(p_top0, t_top0, input.gas_gravity);
    let gas_constant = if kick.volume_bbl > 0.0 && p_top0 > 0.0 {
        p_top0 * kick.volume_bbl / (z0 * rankine(t_top0))
    } else {
        0.0
    };

    debug!(
        bhp_psi = bhp,
        kick_top_ft = kick.top_ft,
        "single-bubble simulation start"
    );

    let rate_ft_per_min = input.migration_rate_ft_per_hr.max(0.0) / 60.0;
    let dpp = input.sidpp_psi;

    let mut snapshots = Vec::with_capacity(input.time_steps_min + 1);
    snapshots.push(TimeStepSnapshot {
        time_min: 0.0,
        casing_pressure_psi: input.sicp_psi,
        drillpipe_pressure_psi: dpp,
        kick_top_tvd_ft: kick.top_ft,
        kick_volume_bbl: kick.volume_bbl,
        max_gas_velocity_ft_per_min: rate_ft_per_min,
        max_holdup: 1.0,
        mixture_density_profile: Vec::new(),
        gas_mass_proxy: gas_constant,
    });

    let mut max_casing = input.sicp_psi;
    let mut arrival: Option<f64> = if kick.top_ft <= 0.0 { Some(0.0) } else { None };

    for minute in 1..=input.time_steps_min {
        kick.top_ft = (kick.top_ft - rate_ft_per_min).max(0.0);

        // Casing pressure required to hold BHP with the current column.
        let casing_est = casing_for(bhp, &fluid, tvd, kick.top_ft, kick.height_ft);

        // New volume from the real-gas law at the new kick-top conditions.
        let p_top = (casing_est + hydrostatic_psi(input.mud_weight_ppg, kick.top_ft)).max(1.0);
        let t_top = fluid.temperature_f_at(kick.top_ft);
        let z = eos.z_factor(p_top, t_top, input.gas_gravity);
        if gas_constant > 0.0 {
            kick.volume_bbl = gas_constant * z * rankine(t_top) / p_top;
        }
        kick.height_ft = (kick.volume_bbl / capacity).min(tvd - kick.top_ft);

        // Single corrective pass with the expanded height.
        let casing = casing_for(bhp, &fluid, tvd, kick.top_ft, kick.height_ft);
        max_casing = max_casing.max(casing);

        if arrival.is_none() && kick.top_ft <= 0.0 {
            arrival = Some(minute as f64);
            debug!(minute, "kick top reached surface");
        }

        snapshots.push(TimeStepSnapshot {
            time_min: minute as f64,
            casing_pressure_psi: casing,
            drillpipe_pressure_psi: dpp,
            kick_top_tvd_ft: kick.top_ft,
            kick_volume_bbl: kick.volume_bbl,
            max_gas_velocity_ft_per_min: rate_ft_per_min,
            max_holdup: 1.0,
            mixture_density_profile: Vec::new(),
            gas_mass_proxy: gas_constant,
        });
    }

    Ok(KickMigrationRun {
        snapshots,
        summary: SimulationSummary {
            max_casing_pressure_psi: max_casing,
            surface_arrival_min: arrival,
        },
    })
}

/// Surface casing pressure that balances the conserved BHP for a kick of
/// `height_ft` whose top sits at `top_ft`:
///
/// ```text
/// BHP = casing + mud above kick + kick gradient across kick + mud below
/// ```
fn casing_for(bhp: f64, fluid: &FluidSystem, tvd: f64, top_ft: f64, height_ft: f64) -> f64 {
    let bottom_ft = (top_ft + height_ft).min(tvd);
    let mud_above = hydrostatic_psi(fluid.mud_weight_ppg, top_ft);
    let kick_column = fluid.kick_gradient_psi_ft * (bottom_ft - top_ft);
    let mud_below = hydrostatic_psi(fluid.mud_weight_ppg, tvd - bottom_ft);
    (bhp - mud_above - kick_column - mud_below).max(0.0)
}

/// Degenerate-geometry fallback: the kick never moves and pressures stay at
/// their shut-in readings.
fn flat_run(input: &SingleBubbleInput) -> KickMigrationRun {
    let snapshots = (0..=input.time_steps_min)
        .map(|minute| TimeStepSnapshot {
            time_min: minute as f64,
            casing_pressure_psi: input.sicp_psi,
            drillpipe_pressure_psi: input.sidpp_psi,
            kick_top_tvd_ft: input.well_depth_tvd_ft.max(0.0),
            kick_volume_bbl: input.kick_volume_bbl.max(0.0),
            max_gas_velocity_ft_per_min: 0.0,
            max_holdup: 1.0,
            mixture_density_profile: Vec::new(),
            gas_mass_proxy: 0.0,
        })
        .collect();

    KickMigrationRun {
        snapshots,
        summary: SimulationSummary {
            max_casing_pressure_psi: input.sicp_psi,
            surface_arrival_min: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_returns_initial_snapshot_only() {
        let input = SingleBubbleInput {
            time_steps_min: 0,
            ..SingleBubbleInput::default()
        };
        let run = simulate_single_bubble(&input, &GasEos::default()).unwrap();
        assert_eq!(run.snapshots.len(), 1);
        assert_eq!(run.snapshots[0].time_min, 0.0);
        assert_eq!(run.snapshots[0].casing_pressure_psi, 350.0);
    }

    #[test]
    fn non_finite_pressure_rejected() {
        let input = SingleBubbleInput {
            sidpp_psi: f64::NAN,
            ..SingleBubbleInput::default()
        };
        let err = simulate_single_bubble(&input, &GasEos::default()).unwrap_err();
        assert!(matches!(err, crate::SimError::NonPhysical { .. }));
    }

    #[test]
    fn degenerate_capacity_gives_flat_result() {
        let input = SingleBubbleInput {
            annular_capacity_bbl_per_ft: 0.0,
            time_steps_min: 10,
            ..SingleBubbleInput::default()
        };
        let run = simulate_single_bubble(&input, &GasEos::default()).unwrap();
        assert_eq!(run.snapshots.len(), 11);
        assert!(run
            .snapshots
            .iter()
            .all(|s| s.casing_pressure_psi == 350.0 && s.kick_top_tvd_ft == 10_000.0));
        assert!(run.summary.surface_arrival_min.is_none());
    }

    #[test]
    fn volume_does_not_dip_on_the_first_step() {
        // The gas-law anchor and the per-step pressure both come from the
        // conserved-BHP balance, so the first derived step must not see a
        // higher kick-top pressure than the anchor and compress the bubble.
        let run = simulate_single_bubble(&SingleBubbleInput::default(), &GasEos::default()).unwrap();
        let v0 = run.snapshots[0].kick_volume_bbl;
        for snap in &run.snapshots[1..4] {
            assert!(
                snap.kick_volume_bbl >= v0,
                "volume {} bbl at {} min below initial {} bbl",
                snap.kick_volume_bbl,
                snap.time_min,
                v0
            );
        }
    }

    #[test]
    fn kick_rises_at_migration_rate() {
        let input = SingleBubbleInput::default();
        let run = simulate_single_bubble(&input, &GasEos::default()).unwrap();
        let first = &run.snapshots[0];
        let later = &run.snapshots[30];
        // 1000 ft/hr for 30 min = 500 ft of rise
        assert!((first.kick_top_tvd_ft - later.kick_top_tvd_ft - 500.0).abs() < 1e-6);
    }

    #[test]
    fn surface_arrival_reported_when_horizon_allows() {
        // 1000 ft well at 1000 ft/hr arrives within an hour
        let input = SingleBubbleInput {
            well_depth_tvd_ft: 1000.0,
            time_steps_min: 120,
            ..SingleBubbleInput::default()
        };
        let run = simulate_single_bubble(&input, &GasEos::default()).unwrap();
        let arrival = run.summary.surface_arrival_min.unwrap();
        assert!(arrival <= 60.0, "arrived at {arrival} min");
    }

    #[test]
    fn no_arrival_within_short_horizon() {
        let input = SingleBubbleInput {
            time_steps_min: 30,
            ..SingleBubbleInput::default()
        };
        let run = simulate_single_bubble(&input, &GasEos::default()).unwrap();
        assert!(run.summary.surface_arrival_min.is_none());
    }
}
