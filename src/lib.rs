//! `quad-chisq` library crate.
//!
//! The binary is a thin wrapper around this library so that the objective
//! evaluation and the file formats can be tested without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod objective;
pub mod report;
