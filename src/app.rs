//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module:
//! - loads `.env` and starts the logger
//! - parses CLI arguments
//! - runs the driver pipeline
//! - prints the optional summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `quad-chisq` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may set RUST_LOG for a run directory; a missing file is fine.
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = config_from_cli(&cli);

    let output = pipeline::run_driver(&config)?;

    if config.summary {
        println!(
            "{}",
            crate::report::format_summary(&output.params, &output.objective)
        );
    }

    Ok(())
}

pub fn config_from_cli(cli: &Cli) -> RunConfig {
    RunConfig {
        input: cli.input.clone(),
        output: cli.output.clone(),
        summary: cli.summary,
        report: cli.report.clone(),
    }
}

/// Log to stderr, `warn` and above unless `RUST_LOG` says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn config_mirrors_cli() {
        let cli = Cli::try_parse_from(["quad-chisq", "--report", "r.json", "in", "out"]).unwrap();
        let config = config_from_cli(&cli);
        assert_eq!(
            config,
            RunConfig {
                input: PathBuf::from("in"),
                output: PathBuf::from("out"),
                summary: false,
                report: Some(PathBuf::from("r.json")),
            }
        );
    }
}
