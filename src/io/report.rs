//! Read/write the JSON evaluation report.
//!
//! The report is the detailed companion to the one-line results file: the
//! parsed parameters, both quadratics, and the per-point residuals. The schema
//! is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{Objective, ParameterSet, Quadratic, ReportFile};
use crate::error::AppError;

/// Assemble the report for one evaluation.
pub fn build_report(input: &Path, params: &ParameterSet, objective: &Objective) -> ReportFile {
    ReportFile {
        tool: env!("CARGO_PKG_NAME").to_string(),
        input: input.display().to_string(),
        parameters: params.clone(),
        reference: Quadratic::REFERENCE,
        fitted: Quadratic::from_parameters(params).ok(),
        samples: objective.samples.clone(),
        chisq: objective.chisq,
        label: Objective::LABEL.to_string(),
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, report: &ReportFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("cannot create report '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, report)
        .map_err(|e| AppError::output(format!("cannot write report: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("cannot open report '{}': {e}", path.display())))?;
    let report: ReportFile =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("invalid report JSON: {e}")))?;
    Ok(report)
}
