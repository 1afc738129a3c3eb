//! Scenario validation.

use pf_engine::{EngineError, PeakFlowInputs, validate_inputs};

use crate::schema::{SCENARIO_VERSION, Scenario};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Scenario name must not be empty")]
    EmptyName,
}

/// Structural checks done on every load and save.
///
/// Input values are not looked at here; a scenario may be saved half filled.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Every problem that would stop the scenario from running.
///
/// Missing required fields come first, then the range messages for the
/// fields that are present. Empty when the scenario can run.
pub fn input_problems(scenario: &Scenario) -> Vec<String> {
    let inputs = scenario.metric_inputs();

    let mut problems = match inputs.complete() {
        Err(err @ EngineError::MissingFields { .. }) => err.messages(),
        _ => Vec::new(),
    };
    problems.extend(validate_inputs(&inputs).errors);
    problems
}

/// Engine-ready inputs, or the first blocking error.
pub fn engine_inputs(scenario: &Scenario) -> Result<PeakFlowInputs, EngineError> {
    let inputs = scenario.metric_inputs();
    let complete = inputs.complete()?;
    let report = validate_inputs(&inputs);
    if !report.is_valid {
        return Err(EngineError::InvalidInputs {
            errors: report.errors,
        });
    }
    Ok(complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_engine::PartialInputs;

    #[test]
    fn reference_scenario_is_clean() {
        let s = Scenario::mica_creek();
        assert!(validate_scenario(&s).is_ok());
        assert!(input_problems(&s).is_empty());
        assert_eq!(engine_inputs(&s).unwrap(), PeakFlowInputs::mica_creek());
    }

    #[test]
    fn future_version_is_rejected() {
        let s = Scenario {
            version: 2,
            ..Scenario::mica_creek()
        };
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 2 })
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let s = Scenario::new("  ", PartialInputs::default());
        assert_eq!(validate_scenario(&s), Err(ValidationError::EmptyName));
    }

    #[test]
    fn missing_and_invalid_are_both_listed() {
        let inputs = PartialInputs {
            curve_number: Some(10.0),
            ..PartialInputs::from(&PeakFlowInputs::mica_creek())
        };
        let mut s = Scenario::new("partial", inputs);
        s.inputs.area = None;

        assert_eq!(
            input_problems(&s),
            vec![
                "A is required".to_string(),
                "Curve number (CN) must be between 15 and 100".to_string(),
            ]
        );
        assert!(matches!(
            engine_inputs(&s),
            Err(EngineError::MissingFields { .. })
        ));
    }
}
