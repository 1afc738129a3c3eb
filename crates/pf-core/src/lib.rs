//! pf-core: stable foundation for peakflow.
//!
//! Contains:
//! - units (uom SI types + constructors in the engine's working units)
//! - convert (legacy metric/imperial conversion factors + `UnitSystem`)
//! - numeric (Real + tolerances + rounding)
//! - error (shared error types)

pub mod convert;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use convert::UnitSystem;
pub use error::PfError;
pub use numeric::*;
pub use units::*;
