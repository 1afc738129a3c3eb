//! Curve number implied by an observed storm.
//!
//! Inverse of the TR-55 runoff equation (Iowa Stormwater Management Manual
//! 2C-5). The value is a cross-check shown next to the caller's CN; the
//! pipeline never substitutes it.

/// Estimate CN from runoff depth `q` and rainfall `p` (both mm).
pub fn estimate_cn(q: f64, p: f64) -> f64 {
    let num = 0.4 * p + 0.8 * q;
    let root = (num.powi(2) - 0.16 * (p * p - q * p)).sqrt();
    25400.0 / ((num - root) / 0.08 + 254.0)
}
