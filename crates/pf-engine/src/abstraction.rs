//! Potential retention and initial abstraction from the curve number.

/// Initial abstraction as a fraction of potential retention.
pub const IA_RATIO: f64 = 0.2;

/// Surface storage and the initial abstraction derived from it, both in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Abstraction {
    /// Potential maximum retention S [mm]
    pub storage: f64,
    /// Initial abstraction Ia [mm]
    pub initial: f64,
}

/// `S = 25400/CN − 254`, `Ia = 0.2·S` (metric TR-55 form).
pub fn surface_storage(cn: f64) -> Abstraction {
    let storage = (25400.0 / cn) - 254.0;
    Abstraction {
        storage,
        initial: IA_RATIO * storage,
    }
}

/// Ratio of initial abstraction to storm precipitation.
pub fn rainfall_fraction(ia: f64, p: f64) -> f64 {
    ia / p
}
