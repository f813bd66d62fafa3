//! Quadratic evaluation.
//!
//! Evaluated as `c0 + c1*x + c2*x*x`, left to right, so the rounding of every
//! intermediate is fixed and results are reproducible to the last bit.

use crate::domain::Quadratic;

/// Evaluate `q` at a single point.
pub fn evaluate(q: &Quadratic, x: f64) -> f64 {
    q.c0 + q.c1 * x + q.c2 * x * x
}
