//! Chi-square between the reference quadratic and a fitted quadratic.
//!
//! ```text
//! chisq = Σ_{pt = 0}^{n-1} (ref(pt) - fit(pt))^2
//! ```
//!
//! Sample points are the integers `0..n`, where `n` is the parameter count
//! from the input file. They are not user supplied.

use log::{debug, warn};

use crate::domain::{Objective, ParameterSet, QUADRATIC_ARITY, Quadratic, SampleResidual};
use crate::error::AppError;
use crate::math::evaluate;

/// Integer sample points `0, 1, ..., n-1` as floats.
pub fn sample_points(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Evaluate the objective for a parsed parameter file.
///
/// - `n == 0`: no samples, `chisq = 0`.
/// - `0 < n < 3`: error, the quadratic is under-specified.
/// - `n > 3`: the first three parameters are used, the rest are ignored.
pub fn evaluate_parameters(params: &ParameterSet) -> Result<Objective, AppError> {
    let n = params.count();
    if n == 0 {
        return Ok(Objective {
            chisq: 0.0,
            samples: Vec::new(),
        });
    }

    let fitted = Quadratic::from_parameters(params)?;
    if n > QUADRATIC_ARITY {
        let ignored: Vec<&str> = params.parameters[QUADRATIC_ARITY..]
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        warn!(
            "{n} parameters supplied; only the first {QUADRATIC_ARITY} define the quadratic, ignoring {}",
            ignored.join(", ")
        );
    }

    evaluate_quadratic(&fitted, n)
}

/// Evaluate the objective for `fitted` over `n` sample points.
///
/// Squared residuals are accumulated point by point in sample order.
pub fn evaluate_quadratic(fitted: &Quadratic, n: usize) -> Result<Objective, AppError> {
    let mut chisq = 0.0;
    let mut samples = Vec::with_capacity(n);
    for x in sample_points(n) {
        let reference = evaluate(&Quadratic::REFERENCE, x);
        let fit = evaluate(fitted, x);
        let residual = reference - fit;
        debug!("pt={x} ref={reference} fit={fit} residual={residual}");

        chisq += residual * residual;
        samples.push(SampleResidual {
            x,
            reference,
            fitted: fit,
            residual,
        });
    }

    if !chisq.is_finite() {
        return Err(AppError::evaluation(format!(
            "non-finite objective value ({chisq}), check the parameter values"
        )));
    }

    Ok(Objective { chisq, samples })
}
