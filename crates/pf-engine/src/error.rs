//! Error types for the peak-flow engine.

use thiserror::Error;

/// Errors that stop a peak-flow calculation before any result is produced.
///
/// An inapplicable model (Tc outside the chart, culvert preconditions unmet)
/// is not an error: it shows up as `None` on the affected result field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid inputs: {}", .errors.join(", "))]
    InvalidInputs { errors: Vec<String> },

    #[error("Missing required inputs: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Every human-readable problem carried by this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            EngineError::InvalidInputs { errors } => errors.clone(),
            EngineError::MissingFields { fields } => fields
                .iter()
                .map(|f| format!("{} is required", f))
                .collect(),
        }
    }
}
