//! Terminal summary for `--summary`.
//!
//! Formatting lives here so the evaluation code stays free of presentation
//! concerns.

use crate::domain::{Objective, ParameterSet, Quadratic};

/// Format the per-point breakdown and the final objective value.
pub fn format_summary(params: &ParameterSet, objective: &Objective) -> String {
    let mut out = String::new();

    out.push_str("=== quad-chisq ===\n");
    out.push_str(&format!(
        "Parameters: {} ({})\n",
        params.count(),
        params.header_label
    ));
    for (i, p) in params.parameters.iter().enumerate() {
        out.push_str(&format!("  c{i} {:<12} {}\n", p.label, p.value));
    }

    let r = Quadratic::REFERENCE;
    out.push_str(&format!("Reference: {} + {}x + {}x^2\n", r.c0, r.c1, r.c2));
    match Quadratic::from_parameters(params) {
        Ok(q) => out.push_str(&format!("Fitted:    {} + {}x + {}x^2\n", q.c0, q.c1, q.c2)),
        Err(_) => out.push_str("Fitted:    (none)\n"),
    }

    if !objective.samples.is_empty() {
        out.push_str(&format!(
            "\n{:>6}  {:>14}  {:>14}  {:>14}\n",
            "pt", "reference", "fitted", "residual"
        ));
        for s in &objective.samples {
            out.push_str(&format!(
                "{:>6}  {:>14.6}  {:>14.6}  {:>14.6}\n",
                s.x, s.reference, s.fitted, s.residual
            ));
        }
    }

    out.push_str(&format!("\n{} = {}\n", Objective::LABEL, objective.chisq));
    out
}
