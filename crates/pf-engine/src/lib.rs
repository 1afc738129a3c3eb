//! pf-engine: peak-flow estimation with the SCS curve-number method.
//!
//! Converts storm and watershed measurements into a peak discharge and a
//! culvert size:
//! - input validation with aggregated messages
//! - potential retention and initial abstraction from CN
//! - diagnostic CN from an observed storm
//! - time of concentration (measured or regression)
//! - unit peak flow from the digitized TR-55 chart
//! - peak discharge and culvert diameter
//!
//! Every function is a pure function of its arguments; nothing is cached
//! between calls.
//!
//! # Example
//!
//! ```no_run
//! use pf_engine::{PeakFlowInputs, calculate_peak_flow};
//!
//! let inputs = PeakFlowInputs {
//!     runoff: 26.5,
//!     precipitation: 49.3,
//!     area: 575.0,
//!     flow_length: 2572.0,
//!     gradient: 0.133,
//!     tc: Some(10.0),
//!     curve_number: 90.0,
//!     pond_factor: 1.0,
//!     culvert_drop: 1.83,
//! };
//!
//! let results = calculate_peak_flow(&inputs).unwrap();
//! if let Some(q) = results.peak_discharge {
//!     println!("Peak flow: {:.2} m³/s", q);
//! }
//! ```

pub mod abstraction;
pub mod common;
pub mod culvert;
pub mod curve_number;
pub mod discharge;
pub mod error;
pub mod inputs;
pub mod pipeline;
pub mod time_of_concentration;
pub mod unit_peak;
pub mod validate;

// Re-exports
pub use abstraction::{Abstraction, rainfall_fraction, surface_storage};
pub use culvert::culvert_diameter;
pub use curve_number::estimate_cn;
pub use discharge::peak_discharge;
pub use error::{EngineError, EngineResult};
pub use inputs::{Field, PartialInputs, PeakFlowInputs};
pub use pipeline::{
    EngineOptions, PeakFlowResults, Rounding, calculate_peak_flow, calculate_peak_flow_with,
};
pub use time_of_concentration::{TcSource, resolve_tc, tc_regression};
pub use unit_peak::estimate_qu;
pub use validate::{ValidationReport, validate_inputs};
