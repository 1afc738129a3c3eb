//! Common utilities for engine calculations.

/// Turn a non-finite intermediate into "no value".
///
/// Used for derived quantities whose formula leaves its domain (Sg = 0 in the
/// Tc regression, for example), which the pipeline reports as absent.
pub fn finite_or_none(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Linear interpolation parameter of `x` between `lo` and `hi`.
pub fn ratio_between(x: f64, lo: f64, hi: f64) -> f64 {
    (x - lo) / (hi - lo)
}
