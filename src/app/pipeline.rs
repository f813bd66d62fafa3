//! The driver pipeline: parameter file -> objective -> results file.
//!
//! Kept separate from `app::run` so tests can drive a full evaluation against
//! real files without going through argv or the logger.

use log::info;

use crate::domain::{Objective, ParameterSet, RunConfig};
use crate::error::AppError;

/// Everything computed by one run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub params: ParameterSet,
    pub objective: Objective,
}

/// Read the parameters, evaluate, and write the results (and optional report).
///
/// Nothing is written unless evaluation succeeds, so a failed run never leaves
/// a stale or meaningless results file behind.
pub fn run_driver(config: &RunConfig) -> Result<RunOutput, AppError> {
    info!("reading parameters from {}", config.input.display());
    let params = crate::io::read_parameter_file(&config.input)?;
    info!("{} parameters ({})", params.count(), params.header_label);

    let objective = crate::objective::evaluate_parameters(&params)?;
    info!("{} = {}", Objective::LABEL, objective.chisq);

    crate::io::write_results(&config.output, &objective)?;
    info!("wrote results to {}", config.output.display());

    if let Some(path) = &config.report {
        let report = crate::io::build_report(&config.input, &params, &objective);
        crate::io::write_report_json(path, &report)?;
        info!("wrote report to {}", path.display());
    }

    Ok(RunOutput { params, objective })
}
