//! Peak discharge from the unit peak flow rate (equation 5.11).

/// `q = (qu/1000)·A·Q·Fp` in m³/s.
///
/// `qu` in m³/s per ha per mm ×10⁻³, `area` in ha, `runoff` in mm.
pub fn peak_discharge(qu: f64, area: f64, runoff: f64, pond_factor: f64) -> f64 {
    (qu / 1000.0) * area * runoff * pond_factor
}
