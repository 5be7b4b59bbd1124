//! Property-based tests for the Z-factor solver.

use proptest::prelude::*;
use wf_pvt::GasEos;

proptest! {
    /// Z stays inside the clamp range for any plausible wellbore condition.
    #[test]
    fn z_always_in_range(
        p in 1.0f64..15_000.0,
        t in 0.0f64..400.0,
        g in 0.55f64..1.2,
    ) {
        let eos = GasEos::default();
        let z = eos.z_factor(p, t, g);
        prop_assert!(z.is_finite());
        prop_assert!((0.05..=3.0).contains(&z), "Z = {} at P={}, T={}, g={}", z, p, t, g);
    }

    /// Density is non-negative and finite everywhere in the valid envelope.
    #[test]
    fn density_non_negative(
        p in 1.0f64..15_000.0,
        t in 0.0f64..400.0,
        g in 0.55f64..1.2,
    ) {
        let eos = GasEos::default();
        let rho = eos.gas_density_lb_ft3(p, t, g);
        prop_assert!(rho.is_finite());
        prop_assert!(rho >= 0.0);
    }

    /// The solver is a pure function: same inputs, same Z.
    #[test]
    fn z_is_deterministic(
        p in 1.0f64..15_000.0,
        t in 0.0f64..400.0,
        g in 0.55f64..1.2,
    ) {
        let eos = GasEos::default();
        prop_assert_eq!(eos.z_factor(p, t, g), eos.z_factor(p, t, g));
    }
}
