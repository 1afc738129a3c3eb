//! Range checks on calculator inputs.

use crate::inputs::{Field, PartialInputs};

/// Admissible region of one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admissible {
    /// Strictly greater than zero.
    Positive,
    /// Closed interval `[lo, hi]`.
    Between(f64, f64),
}

impl Admissible {
    pub fn contains(self, v: f64) -> bool {
        match self {
            Self::Positive => v > 0.0,
            Self::Between(lo, hi) => v >= lo && v <= hi,
        }
    }
}

struct Rule {
    field: Field,
    admissible: Admissible,
    message: &'static str,
}

const RULES: [Rule; 9] = [
    Rule {
        field: Field::Runoff,
        admissible: Admissible::Positive,
        message: "Runoff depth (Q) must be greater than 0",
    },
    Rule {
        field: Field::Precipitation,
        admissible: Admissible::Positive,
        message: "Rainfall (P) must be greater than 0",
    },
    Rule {
        field: Field::Area,
        admissible: Admissible::Positive,
        message: "Watershed area (A) must be greater than 0",
    },
    Rule {
        field: Field::FlowLength,
        admissible: Admissible::Positive,
        message: "Flow length (L) must be greater than 0",
    },
    Rule {
        field: Field::Gradient,
        admissible: Admissible::Between(0.0, 1.0),
        message: "Watershed gradient (Sg) must be between 0 and 1 (0-100%)",
    },
    Rule {
        field: Field::TimeOfConcentration,
        admissible: Admissible::Between(0.1, 10.0),
        message: "Time of concentration (Tc) must be between 0.1 and 10 hours",
    },
    Rule {
        field: Field::CurveNumber,
        admissible: Admissible::Between(15.0, 100.0),
        message: "Curve number (CN) must be between 15 and 100",
    },
    Rule {
        field: Field::PondFactor,
        admissible: Admissible::Between(0.0, 1.0),
        message: "Pond adjustment factor (Fp) must be between 0 and 1",
    },
    Rule {
        field: Field::CulvertDrop,
        admissible: Admissible::Between(0.3, 18.3),
        message: "Culvert height (h) must be between 0.3 and 18.3 meters (1-60 feet)",
    },
];

/// Admissible region for `field`.
pub fn admissible(field: Field) -> Admissible {
    RULES
        .iter()
        .find(|r| r.field == field)
        .map(|r| r.admissible)
        .unwrap_or(Admissible::Positive)
}

/// Outcome of validating a (possibly partial) input record.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check every present field against its admissible range.
///
/// Absent fields are skipped so a form can be validated while it is being
/// filled in. Values are never clamped or modified.
pub fn validate_inputs(inputs: &PartialInputs) -> ValidationReport {
    let mut errors = Vec::new();

    for rule in &RULES {
        let Some(v) = inputs.get(rule.field) else {
            continue;
        };
        if !v.is_finite() {
            errors.push(format!(
                "{} ({}) must be a finite number",
                rule.field.label(),
                rule.field.symbol()
            ));
        } else if !rule.admissible.contains(v) {
            errors.push(rule.message.to_string());
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
