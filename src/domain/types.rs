//! Shared domain types.
//!
//! These types are kept small and serializable so the same values can be
//! logged, printed in the summary, and exported to the JSON report.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Resolved settings for one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: bool,
    pub report: Option<PathBuf>,
}

/// Minimum number of parameters needed to define the fitted quadratic.
pub const QUADRATIC_ARITY: usize = 3;

/// One `(value, label)` pair from the parameter file.
///
/// The label is positional filler in the file format. It is kept only for
/// diagnostics and never affects the objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f64,
    pub label: String,
}

/// Everything read from a parameter file, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Label following the count on the first line (e.g. `variables`).
    pub header_label: String,
    pub parameters: Vec<Parameter>,
}

impl ParameterSet {
    /// Number of parameters declared by the file (`n`).
    pub fn count(&self) -> usize {
        self.parameters.len()
    }
}

/// A quadratic `c0 + c1*x + c2*x^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl Quadratic {
    /// The fixed target curve `1 + 2x + 3x^2`.
    pub const REFERENCE: Quadratic = Quadratic {
        c0: 1.0,
        c1: 2.0,
        c2: 3.0,
    };

    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    /// Build the fitted quadratic from the first three parameters.
    ///
    /// Parameters past the third are not part of the model; callers decide
    /// whether to warn about them.
    pub fn from_parameters(params: &ParameterSet) -> Result<Self, AppError> {
        match params.parameters.as_slice() {
            [c0, c1, c2, ..] => Ok(Self::new(c0.value, c1.value, c2.value)),
            _ => Err(AppError::evaluation(format!(
                "insufficient parameters: need >= {QUADRATIC_ARITY}, got {}",
                params.count()
            ))),
        }
    }

    pub fn coefficients(&self) -> [f64; QUADRATIC_ARITY] {
        [self.c0, self.c1, self.c2]
    }
}

/// Reference vs. fitted value at one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleResidual {
    pub x: f64,
    pub reference: f64,
    pub fitted: f64,
    /// `reference - fitted`
    pub residual: f64,
}

/// Result of one objective evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub chisq: f64,
    pub samples: Vec<SampleResidual>,
}

impl Objective {
    /// Response label written next to the value in the results file.
    pub const LABEL: &'static str = "obj_fn";
}

/// JSON report schema written by `--report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub input: String,
    pub parameters: ParameterSet,
    pub reference: Quadratic,
    /// `None` when the file declared no parameters.
    pub fitted: Option<Quadratic>,
    pub samples: Vec<SampleResidual>,
    pub chisq: f64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[f64]) -> ParameterSet {
        ParameterSet {
            header_label: "variables".to_string(),
            parameters: values
                .iter()
                .enumerate()
                .map(|(i, &value)| Parameter {
                    value,
                    label: format!("x{}", i + 1),
                })
                .collect(),
        }
    }

    #[test]
    fn quadratic_from_three_parameters() {
        let q = Quadratic::from_parameters(&params(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(q, Quadratic::REFERENCE);
    }

    #[test]
    fn quadratic_ignores_extra_parameters() {
        let q = Quadratic::from_parameters(&params(&[4.0, 5.0, 6.0, 7.0])).unwrap();
        assert_eq!(q.coefficients(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn quadratic_rejects_short_parameter_lists() {
        for values in [&[][..], &[1.0][..], &[1.0, 2.0][..]] {
            let err = Quadratic::from_parameters(&params(values)).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_EVALUATION);
            assert!(err.message().contains("need >= 3"), "{err}");
        }
    }
}
