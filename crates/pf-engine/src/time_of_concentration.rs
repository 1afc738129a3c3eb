//! Time of concentration: measured value or watershed-lag regression.

use crate::common::finite_or_none;

/// Where the Tc used for the chart lookup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TcSource {
    /// Supplied by the caller.
    Measured,
    /// Estimated from flow length, gradient and CN.
    Regression,
}

/// Regression estimate of Tc in hours (equation 5.12).
///
/// `sg` in m/m, `l` in m. Returns a non-finite value when the gradient is
/// zero; [`resolve_tc`] treats that as "no estimate".
pub fn tc_regression(sg: f64, cn: f64, l: f64) -> f64 {
    let num = ((1000.0 / cn) - 9.0).powf(0.7);
    let den = 4407.0 * sg.powf(0.5);
    l.powf(0.8) * num / den
}

/// Pick the Tc for the chart lookup: a measured value wins over the estimate.
pub fn resolve_tc(measured: Option<f64>, estimated: Option<f64>) -> Option<(f64, TcSource)> {
    match measured {
        Some(tc) => Some((tc, TcSource::Measured)),
        None => estimated
            .and_then(finite_or_none)
            .map(|tc| (tc, TcSource::Regression)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mica_creek_regression() {
        let tc = tc_regression(0.133, 90.0, 2572.0);
        assert!((tc - 0.561_443).abs() < 1e-5, "tc = {tc}");
    }

    #[test]
    fn steeper_is_faster() {
        assert!(tc_regression(0.3, 80.0, 1000.0) < tc_regression(0.1, 80.0, 1000.0));
    }

    #[test]
    fn flat_watershed_has_no_estimate() {
        let tc = tc_regression(0.0, 80.0, 1000.0);
        assert!(!tc.is_finite());
        assert_eq!(resolve_tc(None, Some(tc)), None);
    }

    #[test]
    fn measured_value_takes_precedence() {
        assert_eq!(
            resolve_tc(Some(10.0), Some(0.56)),
            Some((10.0, TcSource::Measured))
        );
        assert_eq!(
            resolve_tc(None, Some(0.56)),
            Some((0.56, TcSource::Regression))
        );
        assert_eq!(resolve_tc(None, None), None);
    }
}
