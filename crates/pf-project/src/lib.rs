//! pf-project: scenario file format, validation and result reports.

pub mod report;
pub mod schema;
pub mod validate;

pub use report::{Report, ReportRow};
pub use schema::*;
pub use validate::{ValidationError, engine_inputs, input_problems, validate_scenario};

use pf_core::UnitSystem;
use pf_engine::{EngineError, PeakFlowResults, calculate_peak_flow_with};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("Scenario has {} input problem(s): {}", .problems.len(), .problems.join(", "))]
    InputProblems { problems: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &std::path::Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a scenario, picking the format from the file extension.
///
/// `.json` is read as JSON; anything else as YAML.
pub fn load_scenario(path: &std::path::Path) -> ProjectResult<Scenario> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Fail with every input problem when the scenario cannot run.
pub fn check_inputs(scenario: &Scenario) -> ProjectResult<()> {
    let problems = input_problems(scenario);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ProjectError::InputProblems { problems })
    }
}

/// Run the engine on a scenario with the scenario's own rounding policy.
pub fn run_scenario(scenario: &Scenario) -> ProjectResult<PeakFlowResults> {
    let inputs = engine_inputs(scenario)?;
    tracing::debug!(scenario = %scenario.name, units = %scenario.units, "running scenario");
    let results = calculate_peak_flow_with(&inputs, &scenario.options())?;
    Ok(results)
}

/// Run a scenario and render its results in `units`.
pub fn run_report(scenario: &Scenario, units: UnitSystem) -> ProjectResult<Report> {
    let results = run_scenario(scenario)?;
    Ok(Report::new(
        scenario.name.clone(),
        &results,
        units,
        scenario.rounding,
    ))
}
