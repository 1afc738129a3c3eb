//! Unit peak flow rate from the digitized TR-55 chart (Figure 5.4).
//!
//! The chart is stored as 10 Tc bins × 5 Ia/P sub-bins. Every cell carries
//! its own four corner values; neighbouring cells do not always agree on a
//! shared edge, so the table cannot be collapsed into a regular grid. The
//! numbers are literal digitizations and must not be smoothed.

use pf_core::numeric::clamp;

use crate::common::ratio_between;

/// Tc bin edges [h].
pub const TC_EDGES: [f64; 11] = [0.1, 0.2, 0.4, 0.6, 0.8, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0];

/// Ia/P sub-bin edges [-].
pub const IAP_EDGES: [f64; 6] = [0.10, 0.30, 0.35, 0.40, 0.45, 0.50];

/// Corner values of one chart cell, in units of m³/s per ha per mm ×10⁻³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub lo_iap_lo_tc: f64,
    pub hi_iap_lo_tc: f64,
    pub lo_iap_hi_tc: f64,
    pub hi_iap_hi_tc: f64,
}

const fn c(lo_iap_lo_tc: f64, hi_iap_lo_tc: f64, lo_iap_hi_tc: f64, hi_iap_hi_tc: f64) -> Corners {
    Corners {
        lo_iap_lo_tc,
        hi_iap_lo_tc,
        lo_iap_hi_tc,
        hi_iap_hi_tc,
    }
}

/// `CHART[tc_bin][iap_bin]`.
#[rustfmt::skip]
pub const CHART: [[Corners; 5]; 10] = [
    // 0.1 – 0.2 h
    [
        c(4.60, 4.10, 3.44, 3.00),
        c(4.10, 3.80, 3.00, 2.28),
        c(3.80, 3.50, 2.28, 2.47),
        c(3.50, 3.00, 2.47, 2.90),
        c(3.00, 2.28, 2.90, 1.60),
    ],
    // 0.2 – 0.4 h
    [
        c(3.44, 3.00, 2.55, 2.10),
        c(3.00, 2.82, 2.10, 1.88),
        c(2.82, 2.47, 1.88, 1.70),
        c(2.47, 2.90, 1.70, 1.42),
        c(2.90, 1.60, 1.42, 1.15),
    ],
    // 0.4 – 0.6 h
    [
        c(2.55, 2.10, 1.95, 1.67),
        c(2.10, 1.88, 1.67, 1.51),
        c(1.88, 1.70, 1.51, 1.38),
        c(1.70, 1.42, 1.38, 1.15),
        c(1.42, 1.15, 1.15, 0.95),
    ],
    // 0.6 – 0.8 h
    [
        c(1.95, 1.67, 1.70, 1.49),
        c(1.67, 1.51, 1.49, 1.33),
        c(1.51, 1.38, 1.33, 1.19),
        c(1.38, 1.15, 1.19, 0.98),
        c(1.15, 0.95, 0.98, 0.79),
    ],
    // 0.8 – 1 h
    [
        c(1.70, 1.49, 1.50, 1.35),
        c(1.49, 1.33, 1.35, 1.20),
        c(1.33, 1.19, 1.20, 1.03),
        c(1.19, 0.98, 1.03, 0.88),
        c(0.98, 0.79, 0.88, 0.70),
    ],
    // 1 – 2 h
    [
        c(1.50, 1.35, 1.00, 0.80),
        c(1.35, 1.20, 0.80, 0.75),
        c(1.20, 1.03, 0.75, 0.66),
        c(1.03, 0.88, 0.66, 0.56),
        c(0.88, 0.70, 0.56, 0.48),
    ],
    // 2 – 4 h
    [
        c(1.00, 0.80, 0.58, 0.47),
        c(0.80, 0.75, 0.47, 0.45),
        c(0.75, 0.66, 0.45, 0.43),
        c(0.66, 0.56, 0.43, 0.38),
        c(0.56, 0.48, 0.38, 0.35),
    ],
    // 4 – 6 h
    [
        c(0.58, 0.47, 0.42, 0.36),
        c(0.47, 0.45, 0.36, 0.35),
        c(0.45, 0.425, 0.35, 0.33),
        c(0.425, 0.38, 0.33, 0.30),
        c(0.38, 0.35, 0.30, 0.28),
    ],
    // 6 – 8 h
    [
        c(0.42, 0.36, 0.325, 0.28),
        c(0.36, 0.35, 0.28, 0.27),
        c(0.35, 0.33, 0.27, 0.26),
        c(0.33, 0.30, 0.26, 0.25),
        c(0.30, 0.28, 0.25, 0.24),
    ],
    // 8 – 10 h
    [
        c(0.325, 0.275, 0.255, 0.235),
        c(0.275, 0.27, 0.235, 0.23),
        c(0.27, 0.26, 0.23, 0.225),
        c(0.26, 0.25, 0.225, 0.22),
        c(0.25, 0.24, 0.22, 0.215),
    ],
];

/// Chart cell containing a lookup point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub tc_bin: usize,
    pub iap_bin: usize,
}

impl Cell {
    pub fn corners(self) -> Corners {
        CHART[self.tc_bin][self.iap_bin]
    }

    pub fn tc_range(self) -> (f64, f64) {
        (TC_EDGES[self.tc_bin], TC_EDGES[self.tc_bin + 1])
    }

    pub fn iap_range(self) -> (f64, f64) {
        (IAP_EDGES[self.iap_bin], IAP_EDGES[self.iap_bin + 1])
    }
}

/// True when `tc` lies on the chart's Tc axis.
pub fn tc_in_chart(tc: f64) -> bool {
    tc >= TC_EDGES[0] && tc <= TC_EDGES[TC_EDGES.len() - 1]
}

/// Hold Ia/P at the nearest chart edge when it falls off the axis.
pub fn clamp_iap(iap: f64) -> f64 {
    clamp(iap, IAP_EDGES[0], IAP_EDGES[IAP_EDGES.len() - 1])
}

/// Locate the cell for a point already on the chart.
///
/// A value sitting on an interior edge belongs to the lower bin.
pub fn locate(tc: f64, iap: f64) -> Option<Cell> {
    if !tc_in_chart(tc) {
        return None;
    }
    let tc_bin = upper_bin(&TC_EDGES, tc);
    let iap_bin = upper_bin(&IAP_EDGES, clamp_iap(iap));
    Some(Cell { tc_bin, iap_bin })
}

fn upper_bin(edges: &[f64], v: f64) -> usize {
    let last = edges.len() - 2;
    edges[1..=last]
        .iter()
        .position(|&hi| v <= hi)
        .unwrap_or(last)
}

/// Bilinear interpolation inside one cell.
///
/// Interpolates along Tc at the low and high Ia/P edges first, then between
/// those two along Ia/P. The order fixes the last bits of the result.
pub fn interpolate(cell: Cell, tc: f64, iap: f64) -> f64 {
    let (iap_lo, iap_hi) = cell.iap_range();
    let (tc_lo, tc_hi) = cell.tc_range();
    let z = cell.corners();

    let x = ratio_between(iap, iap_lo, iap_hi);
    let y = ratio_between(tc, tc_lo, tc_hi);

    let at_lo_iap = z.lo_iap_lo_tc + (z.lo_iap_hi_tc - z.lo_iap_lo_tc) * y;
    let at_hi_iap = z.hi_iap_lo_tc + (z.hi_iap_hi_tc - z.hi_iap_lo_tc) * y;
    at_lo_iap + (at_hi_iap - at_lo_iap) * x
}

/// Unit peak flow rate for (Tc, Ia/P), or `None` where the chart does not apply.
///
/// Tc outside [0.1, 10] h and negative interpolated values give `None`.
/// Ia/P outside [0.10, 0.50] is clamped to the nearest edge first.
pub fn estimate_qu(tc: f64, iap: f64) -> Option<f64> {
    let cell = locate(tc, iap)?;
    let qu = interpolate(cell, tc, clamp_iap(iap));
    tracing::trace!(tc, iap, ?cell, qu, "unit peak lookup");
    (qu >= 0.0).then_some(qu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chart_corners_are_reproduced() {
        for (i, row) in CHART.iter().enumerate() {
            for (j, z) in row.iter().enumerate() {
                let cell = Cell {
                    tc_bin: i,
                    iap_bin: j,
                };
                let (tc_lo, tc_hi) = cell.tc_range();
                let (iap_lo, iap_hi) = cell.iap_range();
                let at = |tc, iap| interpolate(cell, tc, iap);
                assert!((at(tc_lo, iap_lo) - z.lo_iap_lo_tc).abs() < 1e-12);
                assert!((at(tc_hi, iap_lo) - z.lo_iap_hi_tc).abs() < 1e-12);
                assert!((at(tc_lo, iap_hi) - z.hi_iap_lo_tc).abs() < 1e-12);
                assert!((at(tc_hi, iap_hi) - z.hi_iap_hi_tc).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn edges_belong_to_the_lower_bin() {
        assert_eq!(locate(0.2, 0.30), Some(Cell { tc_bin: 0, iap_bin: 0 }));
        assert_eq!(locate(0.21, 0.31), Some(Cell { tc_bin: 1, iap_bin: 1 }));
        assert_eq!(locate(10.0, 0.50), Some(Cell { tc_bin: 9, iap_bin: 4 }));
        assert_eq!(locate(0.1, 0.10), Some(Cell { tc_bin: 0, iap_bin: 0 }));
    }

    #[test]
    fn off_chart_tc_has_no_value() {
        assert_eq!(estimate_qu(0.09, 0.2), None);
        assert_eq!(estimate_qu(10.01, 0.2), None);
        assert_eq!(estimate_qu(f64::NAN, 0.2), None);
        assert_eq!(estimate_qu(f64::INFINITY, 0.2), None);
    }

    #[test]
    fn mica_creek_point() {
        let qu = estimate_qu(10.0, 0.114_491_773_720_982_68).unwrap();
        assert!((qu - 0.253_550_822_627_901_7).abs() < 1e-12, "qu = {qu}");
    }

    #[test]
    fn interior_point_in_first_cell() {
        // Midpoint of the 0.1–0.2 h, 0.10–0.30 cell is the corner average.
        let qu = estimate_qu(0.15, 0.20).unwrap();
        let expected = (4.60 + 4.10 + 3.44 + 3.00) / 4.0;
        assert!((qu - expected).abs() < 1e-12);
    }

    #[test]
    fn mid_chart_point() {
        // Tc = 3 h, Ia/P = 0.325: halfway in both directions of the 2–4 h cell.
        let qu = estimate_qu(3.0, 0.325).unwrap();
        let expected = (0.80 + 0.75 + 0.47 + 0.45) / 4.0;
        assert!((qu - expected).abs() < 1e-12);
    }

    #[test]
    fn chart_is_never_negative_on_its_domain() {
        for &tc in &TC_EDGES {
            for &iap in &IAP_EDGES {
                assert!(estimate_qu(tc, iap).is_some());
            }
        }
    }

    proptest! {
        #[test]
        fn low_iap_is_held_at_lower_edge(tc in 0.1_f64..=10.0, iap in -1.0_f64..0.10) {
            prop_assert_eq!(estimate_qu(tc, iap), estimate_qu(tc, 0.10));
        }

        #[test]
        fn high_iap_is_held_at_upper_edge(tc in 0.1_f64..=10.0, iap in 0.5_f64..5.0) {
            prop_assert_eq!(estimate_qu(tc, iap), estimate_qu(tc, 0.50));
        }

        #[test]
        fn on_chart_values_are_bounded_by_the_chart(tc in 0.1_f64..=10.0, iap in 0.1_f64..=0.5) {
            let qu = estimate_qu(tc, iap).unwrap();
            prop_assert!(qu >= 0.215 - 1e-12 && qu <= 4.60 + 1e-12);
        }
    }
}
