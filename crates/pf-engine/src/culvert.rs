//! Culvert sizing by inverting the orifice equation.
//!
//! Only meaningful for steep, well-drained crossings. The calculation runs
//! in US customary units with the calculator's own rounded factors: q goes to
//! ft³/s, h to feet rounded to 0.1 ft, and the diameter comes back from
//! inches. Those steps are part of the numeric contract of the sizing.

use pf_core::convert::{cms_to_cfs, inches_to_cm, m_to_ft};
use pf_core::numeric::round_to;

use crate::inputs::Field;
use crate::validate::admissible;

/// Gravitational acceleration [ft/s²]
pub const G_FT_PER_S2: f64 = 32.2;

/// π as carried by the sizing formula.
pub const PI_SIZING: f64 = 3.1415926;

/// Gradient at or below which the orifice model is not used [m/m].
pub const MIN_GRADIENT: f64 = 0.05;

/// True when the orifice sizing applies to this site.
pub fn sizing_applies(gradient: f64, drop: f64) -> bool {
    gradient > MIN_GRADIENT && admissible(Field::CulvertDrop).contains(drop)
}

/// Culvert diameter in cm for peak flow `q` (m³/s) and drop height `drop` (m).
///
/// `drop` is measured from the culvert centre to 1 ft below the road surface.
/// Returns `None` when the site is too flat or the drop is outside
/// [0.3, 18.3] m.
pub fn culvert_diameter(q: f64, gradient: f64, drop: f64) -> Option<f64> {
    if !sizing_applies(gradient, drop) {
        return None;
    }

    let q_cfs = cms_to_cfs(q);
    let h_ft = round_to(m_to_ft(drop), 1);

    let num = 8.0 * q_cfs;
    let den = PI_SIZING * (2.0 * G_FT_PER_S2 * h_ft).sqrt();
    let diameter_in = 12.0 * (num / den).sqrt();

    Some(inches_to_cm(diameter_in))
}
