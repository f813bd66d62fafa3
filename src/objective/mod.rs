//! Objective evaluation.
//!
//! Compares the fitted quadratic against the fixed reference curve at integer
//! sample points and reduces the residuals to a single chi-square value.

pub mod chisq;

pub use chisq::*;
