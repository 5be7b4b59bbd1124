//! Gas deviation factor via the Dranchuk–Abou-Kassem correlation.

use wf_core::numeric::{nearly_equal, Tolerances};
use wf_core::units::rankine;

/// Dranchuk–Abou-Kassem coefficients A1..A11.
const A1: f64 = 0.3265;
const A2: f64 = -1.0700;
const A3: f64 = -0.5339;
const A4: f64 = 0.015_69;
const A5: f64 = -0.051_65;
const A6: f64 = 0.5475;
const A7: f64 = -0.7361;
const A8: f64 = 0.1844;
const A9: f64 = 0.1056;
const A10: f64 = 0.6134;
const A11: f64 = 0.7210;

/// Floor on reduced temperature to keep the correlation out of its
/// singular region near the critical point.
const T_PR_FLOOR: f64 = 1.05;

/// Clamp range for the Z iterate.
const Z_MIN: f64 = 0.05;
const Z_MAX: f64 = 3.0;

/// Pseudo-critical properties of a natural gas from its specific gravity
/// (Standing-type correlation).
#[derive(Clone, Copy, Debug)]
pub struct PseudoCritical {
    /// Pseudo-critical temperature in degR
    pub temperature_r: f64,
    /// Pseudo-critical pressure in psia
    pub pressure_psia: f64,
}

impl PseudoCritical {
    pub fn from_gravity(gas_gravity: f64) -> Self {
        let g = gas_gravity;
        Self {
            temperature_r: 168.0 + 325.0 * g - 12.5 * g * g,
            pressure_psia: 677.0 + 15.0 * g - 37.5 * g * g,
        }
    }
}

/// Real-gas equation of state (Z-factor solver).
///
/// The iteration cap and convergence tolerance are configuration, not
/// hard-coded constants; the defaults are 20 Newton-Raphson steps and
/// |ΔZ| < 1e-6.
#[derive(Clone, Copy, Debug)]
pub struct GasEos {
    /// Maximum Newton-Raphson iterations
    pub max_iterations: usize,
    /// Convergence tolerance on |ΔZ|
    pub tolerance: f64,
}

impl Default for GasEos {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            tolerance: 1e-6,
        }
    }
}

impl GasEos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gas deviation factor Z at `pressure_psia`, `temp_f` for a gas of
    /// specific gravity `gas_gravity` (air = 1).
    ///
    /// Never fails: non-physical inputs (pressure or gravity <= 0) return
    /// the ideal-gas value 1.0, and a non-converged iteration returns the
    /// best-effort final iterate. The result is always in [0.05, 3.0].
    pub fn z_factor(&self, pressure_psia: f64, temp_f: f64, gas_gravity: f64) -> f64 {
        if pressure_psia <= 0.0 || gas_gravity <= 0.0 || !pressure_psia.is_finite() {
            return 1.0;
        }

        let pc = PseudoCritical::from_gravity(gas_gravity);
        let t_pr = (rankine(temp_f) / pc.temperature_r).max(T_PR_FLOOR);
        let p_pr = pressure_psia / pc.pressure_psia;

        let mut z = 1.0;
        for _ in 0..self.max_iterations {
            let f = residual(z, p_pr, t_pr);

            // Forward-difference derivative; bail out when it degenerates.
            let dz = 1e-6;
            let fp = (residual(z + dz, p_pr, t_pr) - f) / dz;
            if fp.abs() < 1e-12 {
                break;
            }

            let z_next = (z - f / fp).clamp(Z_MIN, Z_MAX);
            let converged = nearly_equal(z_next, z, Tolerances::absolute(self.tolerance));
            z = z_next;
            if converged {
                break;
            }
        }

        z.clamp(Z_MIN, Z_MAX)
    }
}

/// Newton residual f(Z) = Z - Z_DAK(rho_r(Z)).
fn residual(z: f64, p_pr: f64, t_pr: f64) -> f64 {
    let rho_r = 0.27 * p_pr / (z * t_pr);
    z - dak_z(rho_r, t_pr)
}

/// Right-hand side of the DAK equation evaluated at a reduced density.
fn dak_z(rho_r: f64, t_pr: f64) -> f64 {
    let t2 = t_pr * t_pr;
    let t3 = t2 * t_pr;
    let r2 = rho_r * rho_r;
    let r5 = r2 * r2 * rho_r;

    let c1 = A1 + A2 / t_pr + A3 / t3 + A4 / (t3 * t_pr) + A5 / (t3 * t2);
    let c2 = A6 + A7 / t_pr + A8 / t2;
    let c3 = A9 * (A7 / t_pr + A8 / t2);

    1.0 + c1 * rho_r + c2 * r2 - c3 * r5
        + A10 * (1.0 + A11 * r2) * (r2 / t3) * (-A11 * r2).exp()
}
