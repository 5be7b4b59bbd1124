// wf-core/src/units.rs
//
// Oilfield ("API field") units used throughout wellflow:
// depth ft, pressure psi, mud weight ppg, volume bbl, diameter in,
// temperature degF (degR for gas-law work).

/// Hydrostatic gradient conversion: psi per ft per ppg.
pub const PSI_PER_FT_PER_PPG: f64 = 0.052;

/// Mass density conversion: lb/ft3 per ppg (gallons per cubic foot).
pub const LB_PER_FT3_PER_PPG: f64 = 7.480_52;

/// Cubic feet per oilfield barrel.
pub const FT3_PER_BBL: f64 = 5.614_583;

/// Annular capacity divisor: bbl/ft = (ID^2 - OD^2) / 1029.4 with inches.
pub const ANNULAR_CAPACITY_DIVISOR: f64 = 1029.4;

/// Fahrenheit to Rankine offset.
pub const RANKINE_OFFSET: f64 = 459.67;

/// Universal gas constant in psia·ft3/(lb-mol·degR).
pub const R_PSIA_FT3: f64 = 10.731_6;

/// Molar mass of air in lb/lb-mol (gas specific gravity reference).
pub const AIR_MOLAR_MASS: f64 = 28.964_7;

/// Standard gravity in ft/s2.
pub const G_FT_PER_S2: f64 = 32.174;

#[inline]
pub fn rankine(t_f: f64) -> f64 {
    t_f + RANKINE_OFFSET
}

/// Mud hydrostatic pressure (psi) for a column of `depth_ft`.
#[inline]
pub fn hydrostatic_psi(mud_weight_ppg: f64, depth_ft: f64) -> f64 {
    PSI_PER_FT_PER_PPG * mud_weight_ppg * depth_ft
}

/// Mud density in lb/ft3 from ppg.
#[inline]
pub fn mud_density_lb_ft3(mud_weight_ppg: f64) -> f64 {
    LB_PER_FT3_PER_PPG * mud_weight_ppg
}

/// Annular capacity (bbl/ft) between a hole/casing ID and a pipe OD, inches.
#[inline]
pub fn annular_capacity_bbl_per_ft(annulus_id_in: f64, pipe_od_in: f64) -> f64 {
    (annulus_id_in * annulus_id_in - pipe_od_in * pipe_od_in) / ANNULAR_CAPACITY_DIVISOR
}

/// Annular cross-section area in ft2.
#[inline]
pub fn annular_area_ft2(annulus_id_in: f64, pipe_od_in: f64) -> f64 {
    std::f64::consts::PI / 4.0 * (annulus_id_in * annulus_id_in - pipe_od_in * pipe_od_in)
        / 144.0
}

/// Annular hydraulic diameter in ft (ID - OD for a concentric annulus).
#[inline]
pub fn hydraulic_diameter_ft(annulus_id_in: f64, pipe_od_in: f64) -> f64 {
    (annulus_id_in - pipe_od_in) / 12.0
}

/// Pressure gradient (psi/ft) of a fluid of density lb/ft3.
#[inline]
pub fn gradient_psi_per_ft(density_lb_ft3: f64) -> f64 {
    density_lb_ft3 / 144.0
}
