// Output formatting: the answer line, terminal display, and JSON report.

pub mod report;
pub mod terminal;

use crate::scoring::blend::SimilarityResult;

/// Label written in front of the score in the answer file.
pub const ANSWER_LABEL: &str = "Similarity";

/// Format the single line appended to the answer file.
pub fn answer_line(result: &SimilarityResult) -> String {
    format!("{ANSWER_LABEL}: {}", result.display_score())
}

/// Join the first `limit` tokens with " | ", noting how many were left out.
pub fn token_preview(tokens: &[String], limit: usize) -> String {
    let shown = tokens
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" | ");

    match tokens.len().saturating_sub(limit) {
        0 => shown,
        hidden => format!("{shown} (+{hidden} more)"),
    }
}
