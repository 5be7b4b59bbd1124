//! Float comparison and validation helpers shared across the workspace.

use crate::WfError;

/// Absolute/relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Pure absolute tolerance, for iterate-to-iterate convergence checks
    /// where the scale of the iterate is already known.
    pub fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-6,
        }
    }
}

/// True when `a` and `b` agree within the absolute tolerance, or within the
/// relative tolerance scaled by the larger magnitude.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities before they enter a pressure balance, where
/// they would otherwise propagate silently through every snapshot.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}
