//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{ComparisonResult, Decision, DEFAULT_DECISION_THRESHOLD};
use crate::types::Probabilities;

/// One-line summary naming both series.
///
/// `P(A > B) = .., P(rope) = .., P(B > A) = ..`
pub fn summary_line(first: &str, second: &str, p: &Probabilities) -> String {
    format!(
        "P({first} > {second}) = {}, P(rope) = {}, P({second} > {first}) = {}",
        p.left, p.rope, p.right
    )
}

/// Format a `ComparisonResult` for terminal output.
pub fn format_result(result: &ComparisonResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);
    let (first, second) = &result.names;
    let meta = &result.metadata;
    let p = &result.probabilities;

    output.push_str(&format!("bayes-rope: {}\n", meta.model));
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!(
        "  Observations: {}   Samples: {}\n",
        meta.n_observations, meta.samples
    ));
    output.push_str(&format!(
        "  Rope: \u{00B1}{}   Prior: {} on {}\n",
        meta.rope, meta.prior_strength, meta.prior_place
    ));
    output.push('\n');

    output.push_str(&format!("  {}\n\n", format_decision(result, first, second)));

    output.push_str(&format!("    P({first} > {second}) = {:.4}\n", p.left));
    output.push_str(&format!("    P(rope)         = {:.4}\n", p.rope));
    output.push_str(&format!("    P({second} > {first}) = {:.4}\n", p.right));
    output.push('\n');

    output.push_str(&sep);
    output.push('\n');
    if let Some(seed) = meta.seed {
        output.push_str(&format!("Seed: {seed}\n"));
    }

    output
}

fn format_decision(result: &ComparisonResult, first: &str, second: &str) -> String {
    match result.decision(DEFAULT_DECISION_THRESHOLD) {
        Decision::FirstBetter => format!("\u{2713} {first} is practically better")
            .green()
            .bold()
            .to_string(),
        Decision::SecondBetter => format!("\u{2713} {second} is practically better")
            .green()
            .bold()
            .to_string(),
        Decision::Equivalent => "\u{2248} Practically equivalent".cyan().bold().to_string(),
        Decision::Undecided => "? No decision at 95%".yellow().bold().to_string(),
    }
}
