//! Domain types used throughout the driver.
//!
//! This module defines:
//!
//! - run configuration (`RunConfig`)
//! - parameter file contents (`Parameter`, `ParameterSet`)
//! - the quadratic model (`Quadratic`)
//! - evaluation outputs (`SampleResidual`, `Objective`, `ReportFile`)

pub mod types;

pub use types::*;
