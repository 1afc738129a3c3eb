//! End-to-end peak-flow calculation.

use pf_core::numeric::round_to;
use pf_core::units::{Length, Time, VolumeRate, cm, cms, hours, mm};

use crate::abstraction::{rainfall_fraction, surface_storage};
use crate::common::finite_or_none;
use crate::culvert::culvert_diameter;
use crate::curve_number::estimate_cn;
use crate::discharge::peak_discharge;
use crate::error::{EngineError, EngineResult};
use crate::inputs::{PartialInputs, PeakFlowInputs};
use crate::time_of_concentration::{TcSource, resolve_tc, tc_regression};
use crate::unit_peak::estimate_qu;
use crate::validate::validate_inputs;

/// How intermediate and reported values are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Rounding {
    /// Full double precision everywhere.
    #[default]
    Exact,
    /// Round where the legacy web calculator rounds: S to 0 dp, Ia to 1 dp,
    /// Ia/P to 2 dp (reported only), qu to 2 dp before q is formed, q to
    /// 2 dp before D is formed, D to 2 dp.
    Legacy,
}

/// Per-call engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub rounding: Rounding,
}

/// Everything the calculator derives from one input record.
///
/// `None` on a field means the empirical model does not apply there; the
/// other fields remain valid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakFlowResults {
    /// Potential maximum retention S [mm]
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    pub storage: f64,
    /// Initial abstraction Ia [mm]
    #[cfg_attr(feature = "serde", serde(rename = "Ia"))]
    pub initial_abstraction: f64,
    /// Ia/P [-]
    #[cfg_attr(feature = "serde", serde(rename = "IaOnP"))]
    pub ia_over_p: f64,
    /// Unit peak flow rate qu [m³/s per ha per mm ×10⁻³]
    #[cfg_attr(feature = "serde", serde(rename = "qu"))]
    pub unit_peak: Option<f64>,
    /// Peak discharge q [m³/s]
    #[cfg_attr(feature = "serde", serde(rename = "q"))]
    pub peak_discharge: Option<f64>,
    /// Culvert diameter D [cm]
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    pub culvert_diameter: Option<f64>,
    /// Regression estimate of Tc [h]
    #[cfg_attr(feature = "serde", serde(rename = "TcCalculated"))]
    pub tc_calculated: Option<f64>,
    /// Tc the chart was read at [h]
    #[cfg_attr(feature = "serde", serde(rename = "TcUsed"))]
    pub tc_used: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "TcSource"))]
    pub tc_source: Option<TcSource>,
    /// CN implied by the storm's Q and P; informational only
    #[cfg_attr(feature = "serde", serde(rename = "CNEstimated"))]
    pub cn_estimated: f64,
}

impl PeakFlowResults {
    pub fn storage_depth(&self) -> Length {
        mm(self.storage)
    }

    pub fn initial_abstraction_depth(&self) -> Length {
        mm(self.initial_abstraction)
    }

    pub fn peak_flow_rate(&self) -> Option<VolumeRate> {
        self.peak_discharge.map(cms)
    }

    pub fn culvert_size(&self) -> Option<Length> {
        self.culvert_diameter.map(cm)
    }

    pub fn time_of_concentration(&self) -> Option<Time> {
        self.tc_used.map(hours)
    }
}

/// Validate `inputs` and run the full calculation with exact arithmetic.
pub fn calculate_peak_flow(inputs: &PeakFlowInputs) -> EngineResult<PeakFlowResults> {
    calculate_peak_flow_with(inputs, &EngineOptions::default())
}

/// Validate `inputs` and run the full calculation.
///
/// Order: validate, S and Ia, resolve Tc (measured before regression),
/// Ia/P, chart lookup, peak discharge, culvert size. Invalid input is the
/// only error; every other failure leaves a `None` on the affected field.
pub fn calculate_peak_flow_with(
    inputs: &PeakFlowInputs,
    options: &EngineOptions,
) -> EngineResult<PeakFlowResults> {
    let report = validate_inputs(&PartialInputs::from(inputs));
    if !report.is_valid {
        tracing::debug!(errors = ?report.errors, "rejecting peak-flow inputs");
        return Err(EngineError::InvalidInputs {
            errors: report.errors,
        });
    }

    let legacy = options.rounding == Rounding::Legacy;
    let fix = |v: f64, decimals: u32| if legacy { round_to(v, decimals) } else { v };

    let tc_calculated = finite_or_none(tc_regression(
        inputs.gradient,
        inputs.curve_number,
        inputs.flow_length,
    ));
    let resolved = resolve_tc(inputs.tc, tc_calculated);

    let abstraction = surface_storage(inputs.curve_number);
    let storage = fix(abstraction.storage, 0);
    let initial_abstraction = fix(abstraction.initial, 1);

    let cn_estimated = estimate_cn(inputs.runoff, inputs.precipitation);
    let ia_over_p = rainfall_fraction(initial_abstraction, inputs.precipitation);

    let unit_peak = resolved
        .and_then(|(tc, _)| estimate_qu(tc, ia_over_p))
        .map(|qu| fix(qu, 2));
    if unit_peak.is_none() {
        tracing::debug!(
            tc = ?resolved.map(|(tc, _)| tc),
            ia_over_p,
            "unit peak flow chart does not apply"
        );
    }

    let peak = unit_peak.map(|qu| {
        fix(
            peak_discharge(qu, inputs.area, inputs.runoff, inputs.pond_factor),
            2,
        )
    });

    let diameter = peak
        .and_then(|q| culvert_diameter(q, inputs.gradient, inputs.culvert_drop))
        .map(|d| fix(d, 2));
    if peak.is_some() && diameter.is_none() {
        tracing::debug!(
            gradient = inputs.gradient,
            drop = inputs.culvert_drop,
            "culvert sizing not applicable"
        );
    }

    let results = PeakFlowResults {
        storage,
        initial_abstraction,
        ia_over_p: fix(ia_over_p, 2),
        unit_peak,
        peak_discharge: peak,
        culvert_diameter: diameter,
        tc_calculated,
        tc_used: resolved.map(|(tc, _)| tc),
        tc_source: resolved.map(|(_, source)| source),
        cn_estimated,
    };
    tracing::debug!(?results, rounding = ?options.rounding, "peak flow calculated");

    Ok(results)
}
