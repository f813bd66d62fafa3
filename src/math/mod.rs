//! Mathematical utilities: quadratic evaluation.

pub mod poly;

pub use poly::*;
