//! Command-line parsing for the quadratic objective driver.
//!
//! Argument parsing is kept separate from evaluation; `app` converts the parsed
//! `Cli` into a `RunConfig` before anything touches the filesystem.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
///
/// Invoked by an optimizer as `quad-chisq <params> <results>`.
#[derive(Debug, Parser)]
#[command(
    name = "quad-chisq",
    version,
    about = "Chi-square of a fitted quadratic against 1 + 2x + 3x^2"
)]
pub struct Cli {
    /// Parameter file: `<n> <label>` followed by `n` `<value> <label>` pairs.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Results file to create (or truncate) with `<chisq> obj_fn`.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Print the per-point breakdown to stdout.
    #[arg(long)]
    pub summary: bool,

    /// Also write a JSON report with parameters and per-point residuals.
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,
}
