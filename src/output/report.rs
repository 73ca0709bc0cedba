// JSON report for a single comparison.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::compare::Comparison;

#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub original: &'a str,
    pub suspect: &'a str,
    pub original_chars: usize,
    pub suspect_chars: usize,
    pub bigram: f64,
    pub trigram: f64,
    pub trigram_included: bool,
    pub score: f64,
    /// Two-decimal presentation value of `score`
    pub rounded: f64,
    pub compared_at: DateTime<Utc>,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(comparison: &'a Comparison, compared_at: DateTime<Utc>) -> Self {
        let result = &comparison.result;
        Self {
            original: &comparison.original_id,
            suspect: &comparison.suspect_id,
            original_chars: comparison.original_chars,
            suspect_chars: comparison.suspect_chars,
            bigram: result.bigram,
            trigram: result.trigram,
            trigram_included: result.trigram_included,
            score: result.score,
            rounded: result.rounded(),
            compared_at,
        }
    }
}

/// Render a comparison as pretty-printed JSON stamped with the current time.
pub fn to_json(comparison: &Comparison) -> Result<String> {
    let report = ComparisonReport::new(comparison, Utc::now());
    Ok(serde_json::to_string_pretty(&report)?)
}
