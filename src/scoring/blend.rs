// Blended similarity: 40% 2-gram Jaccard plus 60% 3-gram Jaccard.
//
// The 3-gram term only counts while at least one document is short. When
// both raw texts exceed the threshold it is forced to 0.0, which caps the
// score at the 2-gram share. Lengths are Unicode scalar counts of the raw,
// pre-normalization content.

use serde::Serialize;
use tracing::debug;

use super::jaccard::jaccard;
use crate::document::Document;
use crate::text::NgramSet;

/// Weights and gating threshold for the blended score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendPolicy {
    /// Weight of the 2-gram Jaccard term (default 0.4)
    pub bigram_weight: f64,
    /// Weight of the 3-gram Jaccard term (default 0.6)
    pub trigram_weight: f64,
    /// A document at or below this many raw characters counts as short
    /// (default 1000)
    pub short_document_chars: usize,
}

impl Default for BlendPolicy {
    fn default() -> Self {
        Self {
            bigram_weight: 0.4,
            trigram_weight: 0.6,
            short_document_chars: 1000,
        }
    }
}

impl BlendPolicy {
    /// Whether the 3-gram term participates for this pair of raw lengths.
    pub fn includes_trigrams(&self, raw_len_a: usize, raw_len_b: usize) -> bool {
        raw_len_a <= self.short_document_chars || raw_len_b <= self.short_document_chars
    }
}

/// The outcome of comparing two documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// 2-gram Jaccard similarity
    pub bigram: f64,
    /// 3-gram Jaccard similarity, 0.0 when gated out
    pub trigram: f64,
    pub trigram_included: bool,
    /// Authoritative, unrounded blended score in [0, 1]
    pub score: f64,
}

impl SimilarityResult {
    /// The score rounded to two decimal places for presentation.
    pub fn rounded(&self) -> f64 {
        round2(self.score)
    }

    /// The score as a two-decimal string, e.g. "0.07".
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Round to two decimal places using the exact stored value.
///
/// Scaling by 100 first can land on a spurious .5 (0.075 is really
/// 0.07499...), so the rounding goes through decimal formatting instead.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Blend the 2-gram and 3-gram Jaccard similarities of two documents.
pub fn blended_score(
    bigrams_a: &NgramSet,
    bigrams_b: &NgramSet,
    trigrams_a: &NgramSet,
    trigrams_b: &NgramSet,
    raw_len_a: usize,
    raw_len_b: usize,
    policy: &BlendPolicy,
) -> SimilarityResult {
    let bigram = jaccard(bigrams_a, bigrams_b);

    let trigram_included = policy.includes_trigrams(raw_len_a, raw_len_b);
    let trigram = if trigram_included {
        jaccard(trigrams_a, trigrams_b)
    } else {
        0.0
    };

    let score = bigram * policy.bigram_weight + trigram * policy.trigram_weight;

    debug!(
        bigram,
        trigram,
        trigram_included,
        score,
        "Blended similarity"
    );

    SimilarityResult {
        bigram,
        trigram,
        trigram_included,
        score,
    }
}

/// Score two raw texts end to end with the default policy.
pub fn score_pair(text_a: &str, text_b: &str) -> f64 {
    let profile_a = Document::new("a", text_a).profile();
    let profile_b = Document::new("b", text_b).profile();
    profile_a.compare(&profile_b, &BlendPolicy::default()).score
}
