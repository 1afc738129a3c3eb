//! Scenario file schema.

use pf_core::UnitSystem;
use pf_core::convert::{acres_to_hectares, ft_to_m, inches_to_mm};
use pf_engine::{EngineOptions, Field, PartialInputs, PeakFlowInputs, Rounding};
use serde::{Deserialize, Serialize};

pub const SCENARIO_VERSION: u32 = 1;

/// One named storm/watershed case.
///
/// `inputs` are stored in the scenario's own unit system and converted to
/// engine units by [`Scenario::metric_inputs`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub units: UnitSystem,
    #[serde(default)]
    pub rounding: Rounding,
    #[serde(default)]
    pub inputs: PartialInputs,
}

impl Scenario {
    pub fn new(name: impl Into<String>, inputs: PartialInputs) -> Self {
        Self {
            version: SCENARIO_VERSION,
            name: name.into(),
            description: None,
            units: UnitSystem::Metric,
            rounding: Rounding::Exact,
            inputs,
        }
    }

    pub fn mica_creek() -> Self {
        Self {
            description: Some(
                "Severe wildfire, Mica Creek Experimental Forest, northern Idaho".to_string(),
            ),
            ..Self::new(
                "Mica Creek severe wildfire",
                PartialInputs::from(&PeakFlowInputs::mica_creek()),
            )
        }
    }

    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            rounding: self.rounding,
        }
    }

    /// Inputs in engine units (mm, ha, m).
    pub fn metric_inputs(&self) -> PartialInputs {
        match self.units {
            UnitSystem::Metric => self.inputs,
            UnitSystem::Imperial => {
                let mut out = PartialInputs::default();
                for field in Field::ALL {
                    out.set(field, self.inputs.get(field).map(|v| to_metric(field, v)));
                }
                out
            }
        }
    }
}

/// Imperial scenario value to engine units.
///
/// Q and P are in inches, A in acres, L and h in feet; the rest are unitless
/// or already in hours.
fn to_metric(field: Field, v: f64) -> f64 {
    match field {
        Field::Runoff | Field::Precipitation => inches_to_mm(v),
        Field::Area => acres_to_hectares(v),
        Field::FlowLength | Field::CulvertDrop => ft_to_m(v),
        Field::Gradient | Field::TimeOfConcentration | Field::CurveNumber | Field::PondFactor => v,
    }
}
