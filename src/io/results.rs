//! Results file read/write.
//!
//! The results file is one line: `<chisq> obj_fn`. The value uses `f64`'s
//! `Display`, which is the shortest representation that parses back to the
//! same bits, so a reader gets exactly the computed value.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Objective;
use crate::error::AppError;

/// Render the results line, including the trailing newline.
pub fn format_results_line(chisq: f64) -> String {
    format!("{chisq} {}\n", Objective::LABEL)
}

/// Create or truncate `path` and write the results line.
pub fn write_results(path: &Path, objective: &Objective) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("cannot open output '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(format_results_line(objective.chisq).as_bytes())
        .map_err(|e| AppError::output(format!("cannot write output '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| AppError::output(format!("cannot write output '{}': {e}", path.display())))?;

    Ok(())
}

/// Read back a results file written by [`write_results`].
pub fn read_results(path: &Path) -> Result<f64, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("cannot open results '{}': {e}", path.display())))?;
    parse_results_line(&text)
}

/// Parse `<value> obj_fn`.
pub fn parse_results_line(text: &str) -> Result<f64, AppError> {
    let mut tokens = text.split_whitespace();
    let value = tokens
        .next()
        .ok_or_else(|| AppError::input("empty results file"))?;
    let value: f64 = value
        .parse()
        .map_err(|_| AppError::input(format!("invalid objective value '{value}' in results file")))?;

    match tokens.next() {
        Some(label) if label == Objective::LABEL => Ok(value),
        Some(label) => Err(AppError::input(format!(
            "unexpected response label '{label}' (expected '{}')",
            Objective::LABEL
        ))),
        None => Err(AppError::input(format!(
            "missing response label '{}' in results file",
            Objective::LABEL
        ))),
    }
}
