//! Real-gas density at wellbore conditions.

use crate::eos::GasEos;
use wf_core::units::{gradient_psi_per_ft, rankine, AIR_MOLAR_MASS, R_PSIA_FT3};

impl GasEos {
    /// Gas density in lb/ft3 from the real-gas law:
    ///
    /// ```text
    /// rho = P * M / (Z * R * T)
    /// ```
    ///
    /// with M = 28.9647 * gravity. Non-physical inputs give 0.0, matching
    /// the benign-default contract of `z_factor`.
    pub fn gas_density_lb_ft3(&self, pressure_psia: f64, temp_f: f64, gas_gravity: f64) -> f64 {
        if pressure_psia <= 0.0 || gas_gravity <= 0.0 {
            return 0.0;
        }
        let z = self.z_factor(pressure_psia, temp_f, gas_gravity);
        let molar_mass = AIR_MOLAR_MASS * gas_gravity;
        pressure_psia * molar_mass / (z * R_PSIA_FT3 * rankine(temp_f))
    }
}

/// Pressure gradient (psi/ft) of a gas column at local conditions.
pub fn gas_gradient_psi_per_ft(
    eos: &GasEos,
    pressure_psia: f64,
    temp_f: f64,
    gas_gravity: f64,
) -> f64 {
    gradient_psi_per_ft(eos.gas_density_lb_ft3(pressure_psia, temp_f, gas_gravity))
}
