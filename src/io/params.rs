//! Parameter file ingest.
//!
//! The format is whitespace-delimited tokens:
//!
//! ```text
//! <n> <label>
//! <value_0> <label_0>
//! ...
//! <value_{n-1}> <label_{n-1}>
//! ```
//!
//! Line breaks carry no meaning; they are tracked only to point errors at the
//! right place. Anything after the `n`th pair is ignored, which lets the driver
//! read optimizer parameter files that append further sections (function
//! lists, active set vectors, ...) after the variables.
//!
//! The file is tokenized as bytes. Only the count and the values have to be
//! text; labels in any encoding are accepted and decoded lossily.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{Parameter, ParameterSet};
use crate::error::AppError;

/// Read and parse a parameter file.
pub fn read_parameter_file(path: &Path) -> Result<ParameterSet, AppError> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::input(format!("cannot open input '{}': {e}", path.display())))?;

    parse_parameters(&bytes)
        .map_err(|e| AppError::new(e.exit_code(), format!("{}: {e}", path.display())))
}

/// Parse parameter file contents.
pub fn parse_parameters(input: &[u8]) -> Result<ParameterSet, AppError> {
    let mut tokens = Tokens::new(input);

    let (line, count_token) = tokens.next_token("parameter count")?;
    let count: usize = parse_token(count_token).ok_or_else(|| {
        AppError::input(format!(
            "line {line}: invalid parameter count '{}' (expected a non-negative integer)",
            String::from_utf8_lossy(count_token)
        ))
    })?;
    let (_, header_label) = tokens.next_token("label after parameter count")?;

    let mut parameters = Vec::with_capacity(count.min(1024));
    for i in 0..count {
        let what = format!("value for parameter {} of {count}", i + 1);
        let (line, value_token) = tokens.next_token(&what)?;
        let value: f64 = parse_token(value_token).ok_or_else(|| {
            AppError::input(format!(
                "line {line}: invalid value '{}' for parameter {} of {count}",
                String::from_utf8_lossy(value_token),
                i + 1
            ))
        })?;
        let what = format!("label for parameter {} of {count}", i + 1);
        let (_, label) = tokens.next_token(&what)?;
        let label = String::from_utf8_lossy(label).into_owned();

        debug!("parameter {i}: {label} = {value}");
        parameters.push(Parameter { value, label });
    }

    Ok(ParameterSet {
        header_label: String::from_utf8_lossy(header_label).into_owned(),
        parameters,
    })
}

fn parse_token<T: std::str::FromStr>(token: &[u8]) -> Option<T> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// ASCII-whitespace tokenizer over bytes that remembers 1-based line numbers.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a [u8])> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a [u8]) -> Self {
        let inner = input.split(|&b| b == b'\n').enumerate().flat_map(|(idx, line)| {
            line.split(|b| b.is_ascii_whitespace())
                .filter(|tok| !tok.is_empty())
                .map(move |tok| (idx + 1, tok))
        });
        Self {
            inner: Box::new(inner),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<(usize, &'a [u8]), AppError> {
        self.inner
            .next()
            .ok_or_else(|| AppError::input(format!("unexpected end of parameter file: expected {what}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &ParameterSet) -> Vec<f64> {
        set.parameters.iter().map(|p| p.value).collect()
    }

    #[test]
    fn parses_basic_file() {
        let set = parse_parameters(b"3 names\n1.0 a\n2.0 b\n3.0 c\n").unwrap();
        assert_eq!(set.header_label, "names");
        assert_eq!(set.count(), 3);
        assert_eq!(values(&set), vec![1.0, 2.0, 3.0]);
        let labels: Vec<&str> = set.parameters.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn layout_is_whitespace_only() {
        let set = parse_parameters(b"  3 variables 1 x1\t-2.5e-1 x2\r\n\r\n   4 x3").unwrap();
        assert_eq!(values(&set), vec![1.0, -0.25, 4.0]);
        assert_eq!(set.parameters[2].label, "x3");
    }

    #[test]
    fn labels_need_not_be_utf8() {
        let set = parse_parameters(b"3 n\xe4mes\n1.0 caf\xe9\n2.0 b\n3.0 c\n").unwrap();
        assert_eq!(values(&set), vec![1.0, 2.0, 3.0]);
        assert_eq!(set.parameters[0].label, "caf\u{fffd}");
        assert_eq!(set.header_label, "n\u{fffd}mes");
    }

    #[test]
    fn non_utf8_value_is_an_error() {
        let err = parse_parameters(b"3 names\n1.0 a\n2.\xff b\n3.0 c\n").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().starts_with("line 3: invalid value"), "{err}");
    }

    #[test]
    fn ignores_trailing_sections() {
        let text = "\
                       3 variables
  1.000000000000000e+00 x1
  2.000000000000000e+00 x2
  3.000000000000000e+00 x3
                       1 functions
                       1 ASV_1:obj_fn
";
        let set = parse_parameters(text.as_bytes()).unwrap();
        assert_eq!(values(&set), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_count_has_no_parameters() {
        let set = parse_parameters(b"0 variables\n").unwrap();
        assert_eq!(set.count(), 0);
    }

    #[test]
    fn rejects_missing_header_label() {
        let err = parse_parameters(b"3").unwrap_err();
        assert!(err.message().contains("label after parameter count"), "{err}");
    }

    #[test]
    fn rejects_bad_count() {
        for text in ["-1 names", "three names", "2.5 names"] {
            let err = parse_parameters(text.as_bytes()).unwrap_err();
            assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
            assert!(err.message().contains("invalid parameter count"), "{err}");
        }
    }

    #[test]
    fn bad_value_reports_line() {
        let err = parse_parameters(b"3 names\n1.0 a\noops b\n3.0 c\n").unwrap_err();
        assert!(err.message().starts_with("line 3:"), "{err}");
        assert!(err.message().contains("'oops'"), "{err}");
    }

    #[test]
    fn truncated_file_is_an_error() {
        let err = parse_parameters(b"3 names\n1.0 a\n2.0 b\n").unwrap_err();
        assert!(err.message().contains("parameter 3 of 3"), "{err}");

        let err = parse_parameters(b"3 names\n1.0 a\n2.0").unwrap_err();
        assert!(err.message().contains("label for parameter 2 of 3"), "{err}");
    }
}
