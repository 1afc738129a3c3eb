//! Input records for the peak-flow engine.
//!
//! All values are in the engine's working units: depths in mm, area in ha,
//! lengths in m, time in hours. With the `serde` feature the fields
//! (de)serialize under the symbols used on the calculator form
//! (`Q`, `P`, `A`, `L`, `Sg`, `Tc`, `CN`, `Fp`, `h`).

use core::fmt;

use crate::error::{EngineError, EngineResult};

/// One input quantity of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Runoff,
    Precipitation,
    Area,
    FlowLength,
    Gradient,
    TimeOfConcentration,
    CurveNumber,
    PondFactor,
    CulvertDrop,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Runoff,
        Field::Precipitation,
        Field::Area,
        Field::FlowLength,
        Field::Gradient,
        Field::TimeOfConcentration,
        Field::CurveNumber,
        Field::PondFactor,
        Field::CulvertDrop,
    ];

    /// Symbol used on the calculator form.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Runoff => "Q",
            Self::Precipitation => "P",
            Self::Area => "A",
            Self::FlowLength => "L",
            Self::Gradient => "Sg",
            Self::TimeOfConcentration => "Tc",
            Self::CurveNumber => "CN",
            Self::PondFactor => "Fp",
            Self::CulvertDrop => "h",
        }
    }

    /// Human-readable name, as used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Runoff => "Runoff depth",
            Self::Precipitation => "Rainfall",
            Self::Area => "Watershed area",
            Self::FlowLength => "Flow length",
            Self::Gradient => "Watershed gradient",
            Self::TimeOfConcentration => "Time of concentration",
            Self::CurveNumber => "Curve number",
            Self::PondFactor => "Pond adjustment factor",
            Self::CulvertDrop => "Culvert height",
        }
    }

    /// Tc is the only field the pipeline can do without.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::TimeOfConcentration)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.symbol())
    }
}

/// A complete set of calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakFlowInputs {
    /// Storm runoff depth [mm]
    #[cfg_attr(feature = "serde", serde(rename = "Q"))]
    pub runoff: f64,
    /// Storm precipitation depth [mm]
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub precipitation: f64,
    /// Watershed area [ha]
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub area: f64,
    /// Longest flow length [m]
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub flow_length: f64,
    /// Average watershed gradient [m/m]
    #[cfg_attr(feature = "serde", serde(rename = "Sg"))]
    pub gradient: f64,
    /// Measured time of concentration [h]; the regression estimate is used when absent
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Tc", default, skip_serializing_if = "Option::is_none")
    )]
    pub tc: Option<f64>,
    /// Runoff curve number [-]
    #[cfg_attr(feature = "serde", serde(rename = "CN"))]
    pub curve_number: f64,
    /// Pond and swamp adjustment factor [-]
    #[cfg_attr(feature = "serde", serde(rename = "Fp"))]
    pub pond_factor: f64,
    /// Culvert drop height [m]
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    pub culvert_drop: f64,
}

impl PeakFlowInputs {
    /// Severe wildfire in the Mica Creek Experimental Forest, northern Idaho.
    pub fn mica_creek() -> Self {
        Self {
            runoff: 26.5,
            precipitation: 49.3,
            area: 575.0,
            flow_length: 2572.0,
            gradient: 0.133,
            tc: Some(10.0),
            curve_number: 90.0,
            pond_factor: 1.0,
            culvert_drop: 1.83,
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        PartialInputs::from(self).get(field)
    }
}

/// Calculator inputs as a form holds them while being filled in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialInputs {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Q", default, skip_serializing_if = "Option::is_none")
    )]
    pub runoff: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "P", default, skip_serializing_if = "Option::is_none")
    )]
    pub precipitation: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "A", default, skip_serializing_if = "Option::is_none")
    )]
    pub area: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "L", default, skip_serializing_if = "Option::is_none")
    )]
    pub flow_length: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Sg", default, skip_serializing_if = "Option::is_none")
    )]
    pub gradient: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Tc", default, skip_serializing_if = "Option::is_none")
    )]
    pub tc: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "CN", default, skip_serializing_if = "Option::is_none")
    )]
    pub curve_number: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Fp", default, skip_serializing_if = "Option::is_none")
    )]
    pub pond_factor: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "h", default, skip_serializing_if = "Option::is_none")
    )]
    pub culvert_drop: Option<f64>,
}

impl PartialInputs {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Runoff => self.runoff,
            Field::Precipitation => self.precipitation,
            Field::Area => self.area,
            Field::FlowLength => self.flow_length,
            Field::Gradient => self.gradient,
            Field::TimeOfConcentration => self.tc,
            Field::CurveNumber => self.curve_number,
            Field::PondFactor => self.pond_factor,
            Field::CulvertDrop => self.culvert_drop,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Runoff => &mut self.runoff,
            Field::Precipitation => &mut self.precipitation,
            Field::Area => &mut self.area,
            Field::FlowLength => &mut self.flow_length,
            Field::Gradient => &mut self.gradient,
            Field::TimeOfConcentration => &mut self.tc,
            Field::CurveNumber => &mut self.curve_number,
            Field::PondFactor => &mut self.pond_factor,
            Field::CulvertDrop => &mut self.culvert_drop,
        };
        *slot = value;
    }

    /// Required fields that have no value yet, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_none())
            .collect()
    }

    /// Promote to a complete record, or list every missing required field.
    ///
    /// Values are not range-checked here; that is the validator's job.
    pub fn complete(&self) -> EngineResult<PeakFlowInputs> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(EngineError::MissingFields {
                fields: missing.into_iter().map(Field::symbol).collect(),
            });
        }

        let value = |f: Field| self.get(f).unwrap_or_default();
        Ok(PeakFlowInputs {
            runoff: value(Field::Runoff),
            precipitation: value(Field::Precipitation),
            area: value(Field::Area),
            flow_length: value(Field::FlowLength),
            gradient: value(Field::Gradient),
            tc: self.tc,
            curve_number: value(Field::CurveNumber),
            pond_factor: value(Field::PondFactor),
            culvert_drop: value(Field::CulvertDrop),
        })
    }
}

impl From<&PeakFlowInputs> for PartialInputs {
    fn from(inputs: &PeakFlowInputs) -> Self {
        Self {
            runoff: Some(inputs.runoff),
            precipitation: Some(inputs.precipitation),
            area: Some(inputs.area),
            flow_length: Some(inputs.flow_length),
            gradient: Some(inputs.gradient),
            tc: inputs.tc,
            curve_number: Some(inputs.curve_number),
            pond_factor: Some(inputs.pond_factor),
            culvert_drop: Some(inputs.culvert_drop),
        }
    }
}
