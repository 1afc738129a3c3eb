//! Human and machine readable rendering of a result record.

use std::fmt;

use pf_core::UnitSystem;
use pf_core::convert::{cm_to_inches, cms_to_cfs, mm_to_inches, qu_si_to_us};
use pf_engine::{PeakFlowResults, Rounding, TcSource};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub symbol: &'static str,
    pub label: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
    #[serde(skip)]
    decimals: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    pub scenario: String,
    pub units: UnitSystem,
    pub rounding: Rounding,
    pub tc_source: Option<TcSource>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(
        scenario: impl Into<String>,
        results: &PeakFlowResults,
        units: UnitSystem,
        rounding: Rounding,
    ) -> Self {
        let imperial = units == UnitSystem::Imperial;
        let depth = |v: f64| if imperial { mm_to_inches(v) } else { v };
        let depth_unit = if imperial { "in" } else { "mm" };

        let rows = vec![
            row("S", "Potential maximum retention", Some(depth(results.storage)), depth_unit, 2),
            row(
                "Ia",
                "Initial abstraction",
                Some(depth(results.initial_abstraction)),
                depth_unit,
                2,
            ),
            row("Ia/P", "Initial abstraction ratio", Some(results.ia_over_p), "-", 3),
            row("Tc calc", "Regression time of concentration", results.tc_calculated, "h", 2),
            row("Tc", "Time of concentration used", results.tc_used, "h", 2),
            row(
                "qu",
                "Unit peak flow rate",
                results
                    .unit_peak
                    .map(|v| if imperial { qu_si_to_us(v) } else { v }),
                if imperial {
                    "ft³/s/ac/in"
                } else {
                    "m³/s/ha/mm ×10⁻³"
                },
                4,
            ),
            row(
                "q",
                "Peak discharge",
                results
                    .peak_discharge
                    .map(|v| if imperial { cms_to_cfs(v) } else { v }),
                if imperial { "ft³/s" } else { "m³/s" },
                2,
            ),
            row(
                "D",
                "Culvert diameter",
                results
                    .culvert_diameter
                    .map(|v| if imperial { cm_to_inches(v) } else { v }),
                if imperial { "in" } else { "cm" },
                2,
            ),
            row("CN est", "Curve number from storm", Some(results.cn_estimated), "-", 1),
        ];

        Self {
            scenario: scenario.into(),
            units,
            rounding,
            tc_source: results.tc_source,
            rows,
        }
    }

    pub fn value(&self, symbol: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.symbol == symbol)
            .and_then(|r| r.value)
    }
}

fn row(
    symbol: &'static str,
    label: &'static str,
    value: Option<f64>,
    unit: &'static str,
    decimals: usize,
) -> ReportRow {
    ReportRow {
        symbol,
        label,
        value,
        unit,
        decimals,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} units)", self.scenario, self.units)?;
        for r in &self.rows {
            let value = match r.value {
                Some(v) => format!("{:.*}", r.decimals, v),
                None => "n/a".to_string(),
            };
            write!(f, "  {:<8} {:<34} {:>12} {}", r.symbol, r.label, value, r.unit)?;
            if r.symbol == "Tc" {
                match self.tc_source {
                    Some(TcSource::Measured) => write!(f, " (measured)")?,
                    Some(TcSource::Regression) => write!(f, " (regression)")?,
                    None => {}
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_engine::{PeakFlowInputs, calculate_peak_flow};

    fn mica() -> PeakFlowResults {
        calculate_peak_flow(&PeakFlowInputs::mica_creek()).unwrap()
    }

    #[test]
    fn metric_report_keeps_engine_values() {
        let r = mica();
        let report = Report::new("Mica", &r, UnitSystem::Metric, Rounding::Exact);
        assert_eq!(report.value("S"), Some(r.storage));
        assert_eq!(report.value("q"), r.peak_discharge);
        assert_eq!(report.value("D"), r.culvert_diameter);
    }

    #[test]
    fn imperial_report_converts() {
        let r = mica();
        let report = Report::new("Mica", &r, UnitSystem::Imperial, Rounding::Exact);
        let d_in = report.value("D").unwrap();
        assert!((d_in - r.culvert_diameter.unwrap() / 2.54).abs() < 1e-9);
        let q_cfs = report.value("q").unwrap();
        assert!((q_cfs - r.peak_discharge.unwrap() * 35.31).abs() < 1e-9);
        assert_eq!(report.value("Tc"), Some(10.0));
    }

    #[test]
    fn missing_values_render_as_na() {
        let r = PeakFlowResults {
            unit_peak: None,
            peak_discharge: None,
            culvert_diameter: None,
            ..mica()
        };
        let text = Report::new("Off chart", &r, UnitSystem::Metric, Rounding::Exact).to_string();
        assert!(text.contains("n/a"));
        assert!(text.contains("(measured)"));
    }

    #[test]
    fn json_report_has_rows() {
        let report = Report::new("Mica", &mica(), UnitSystem::Metric, Rounding::Legacy);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["units"], "metric");
        assert_eq!(json["rounding"], "legacy");
        assert_eq!(json["tc_source"], "measured");
        assert_eq!(json["rows"].as_array().unwrap().len(), 9);
        assert!(json["rows"][0].get("decimals").is_none());
    }
}
