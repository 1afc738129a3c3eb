//! Metric/imperial conversions used by the peak-flow calculator.
//!
//! The factors are the rounded ones the legacy calculator was calibrated
//! with (1 m = 3.281 ft, 1 ha = 2.471 ac, 1 m³/s = 35.31 ft³/s). They differ
//! from the exact `uom` factors by well under 0.1 %, but results are compared
//! against values produced with these literals, so they must not be swapped
//! for exact ones.

use core::fmt;
use core::str::FromStr;

use crate::PfError;

pub const MM_PER_INCH: f64 = 25.4;
pub const CM_PER_INCH: f64 = 2.54;
pub const FT_PER_M: f64 = 3.281;
pub const ACRES_PER_HA: f64 = 2.471;
pub const CFS_PER_CMS: f64 = 35.31;
pub const MILES_PER_KM: f64 = 0.621371;
pub const KM_PER_MILE: f64 = 1.60934;

/// Which unit system a caller reads and writes values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = PfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(PfError::UnknownUnitSystem {
                name: other.to_string(),
            }),
        }
    }
}

// Distance

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

// Length

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn m_to_ft(m: f64) -> f64 {
    m * FT_PER_M
}

pub fn ft_to_m(ft: f64) -> f64 {
    ft / FT_PER_M
}

// Temperature

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

// Area

pub fn hectares_to_acres(hectares: f64) -> f64 {
    hectares * ACRES_PER_HA
}

pub fn acres_to_hectares(acres: f64) -> f64 {
    acres / ACRES_PER_HA
}

// Flow rate

pub fn cms_to_cfs(cms: f64) -> f64 {
    cms * CFS_PER_CMS
}

pub fn cfs_to_cms(cfs: f64) -> f64 {
    cfs / CFS_PER_CMS
}

/// Unit peak flow rate, m³/s per ha per mm (×10⁻³) to ft³/s per acre per inch.
pub fn qu_si_to_us(qu: f64) -> f64 {
    qu * CFS_PER_CMS / ACRES_PER_HA / MM_PER_INCH
}

pub fn qu_us_to_si(qu_us: f64) -> f64 {
    qu_us / (CFS_PER_CMS / ACRES_PER_HA / MM_PER_INCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    const TOL: Tolerances = Tolerances {
        abs: 1e-9,
        rel: 1e-12,
    };

    #[test]
    fn known_values() {
        assert_eq!(inches_to_mm(1.0), 25.4);
        assert_eq!(m_to_ft(1.83), 1.83 * 3.281);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert!(nearly_equal(hectares_to_acres(575.0), 1420.825, TOL));
        assert!(nearly_equal(cms_to_cfs(1.0), 35.31, TOL));
    }

    #[test]
    fn legacy_factors_track_exact_ones() {
        use crate::units::{cms, ha, m};
        use uom::si::{area::acre, length::foot, volume_rate::cubic_foot_per_second};

        let rel = |a: f64, b: f64| ((a - b) / b).abs();
        assert!(rel(m_to_ft(100.0), m(100.0).get::<foot>()) < 1e-3);
        assert!(rel(hectares_to_acres(100.0), ha(100.0).get::<acre>()) < 1e-3);
        assert!(rel(cms_to_cfs(100.0), cms(100.0).get::<cubic_foot_per_second>()) < 1e-3);
    }

    #[test]
    fn unit_system_parses() {
        assert_eq!("Metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!(" imperial ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("furlongs".parse::<UnitSystem>().is_err());
        assert_eq!(UnitSystem::default().to_string(), "metric");
    }

    proptest! {
        #[test]
        fn conversion_pairs_are_inverse(x in 0.0_f64..1.0e5) {
            let pairs: [(fn(f64) -> f64, fn(f64) -> f64); 8] = [
                (mm_to_inches, inches_to_mm),
                (cm_to_inches, inches_to_cm),
                (m_to_ft, ft_to_m),
                (hectares_to_acres, acres_to_hectares),
                (cms_to_cfs, cfs_to_cms),
                (celsius_to_fahrenheit, fahrenheit_to_celsius),
                (qu_si_to_us, qu_us_to_si),
                (km_to_miles, |mi| mi / MILES_PER_KM),
            ];
            for (forward, back) in pairs {
                prop_assert!(nearly_equal(back(forward(x)), x, TOL));
                prop_assert!(nearly_equal(forward(back(x)), x, TOL));
            }
        }

        #[test]
        fn miles_and_km_agree_to_five_digits(x in 0.0_f64..1.0e4) {
            prop_assert!((miles_to_km(km_to_miles(x)) - x).abs() <= 1e-5 * x.max(1.0));
        }
    }
}
