/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Round to a fixed number of decimal places, the way the legacy calculator
/// does it (`toFixed` followed by a numeric re-parse).
///
/// The decision is made on the exact binary value, so `0.015` (stored just
/// below the midpoint) rounds down to `0.01`. Only values that sit exactly on
/// a midpoint round away from zero.
pub fn round_to(v: Real, decimals: u32) -> Real {
    if !v.is_finite() {
        return v;
    }
    let magnitude = v.abs();

    // Exact midpoint iff magnitude·2^(d+1) is an odd integer; scaling by a
    // power of two is exact.
    let scaled = magnitude * 2_f64.powi(decimals as i32 + 1);
    let on_midpoint = scaled.fract() == 0.0 && scaled % 2.0 == 1.0;
    let target = if on_midpoint {
        magnitude.next_up()
    } else {
        magnitude
    };

    // Fixed-precision formatting rounds the exact stored value.
    let rounded: Real = format!("{:.*}", decimals as usize, target)
        .parse()
        .unwrap_or(magnitude);
    rounded.copysign(v)
}

/// Clamp a value between min and max.
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
