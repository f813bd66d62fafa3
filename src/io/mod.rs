//! Input/output helpers.
//!
//! - parameter file ingest (`params`)
//! - results file read/write (`results`)
//! - JSON report read/write (`report`)

pub mod params;
pub mod report;
pub mod results;

pub use params::*;
pub use report::*;
pub use results::*;
