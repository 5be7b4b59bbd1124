//! Well geometry and fluid system descriptions shared by both models.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use wf_core::units::{annular_area_ft2, annular_capacity_bbl_per_ft, hydraulic_diameter_ft};

/// Annular geometry of the well, immutable per simulation call.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WellGeometry {
    /// True vertical depth in ft
    pub tvd_ft: f64,
    /// Annulus inner diameter (casing/hole ID) in inches
    pub annulus_id_in: f64,
    /// Pipe outer diameter in inches
    pub pipe_od_in: f64,
}

impl WellGeometry {
    pub fn new(tvd_ft: f64, annulus_id_in: f64, pipe_od_in: f64) -> SimResult<Self> {
        let geom = Self {
            tvd_ft,
            annulus_id_in,
            pipe_od_in,
        };
        geom.validate()?;
        Ok(geom)
    }

    /// Reject geometry that would divide by zero downstream.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.tvd_ft > 0.0) {
            return Err(SimError::InvalidGeometry {
                what: "well depth must be positive",
            });
        }
        if self.hydraulic_diameter_ft() <= 0.0 {
            return Err(SimError::InvalidGeometry {
                what: "annular hydraulic diameter must be positive",
            });
        }
        if self.annular_area_ft2() <= 0.0 {
            return Err(SimError::InvalidGeometry {
                what: "annular flow area must be positive",
            });
        }
        Ok(())
    }

    pub fn annular_capacity_bbl_per_ft(&self) -> f64 {
        annular_capacity_bbl_per_ft(self.annulus_id_in, self.pipe_od_in)
    }

    pub fn annular_area_ft2(&self) -> f64 {
        annular_area_ft2(self.annulus_id_in, self.pipe_od_in)
    }

    pub fn hydraulic_diameter_ft(&self) -> f64 {
        hydraulic_diameter_ft(self.annulus_id_in, self.pipe_od_in)
    }
}

/// Fluid properties of the mud/gas system, immutable per simulation call.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FluidSystem {
    /// Mud weight in ppg
    pub mud_weight_ppg: f64,
    /// Kick gas specific gravity (air = 1)
    pub gas_gravity: f64,
    /// Kick fluid pressure gradient in psi/ft (single-bubble model)
    pub kick_gradient_psi_ft: f64,
    /// Surface temperature in degF
    pub surface_temp_f: f64,
    /// Geothermal gradient in degF per 100 ft
    pub temp_gradient_f_per_100ft: f64,
}

impl FluidSystem {
    /// Formation temperature at a given depth from the linear geotherm.
    pub fn temperature_f_at(&self, depth_ft: f64) -> f64 {
        self.surface_temp_f + self.temp_gradient_f_per_100ft * depth_ft.max(0.0) / 100.0
    }
}
