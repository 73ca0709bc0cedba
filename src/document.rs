// Documents and their per-document n-gram profiles.

use serde::Serialize;
use tracing::debug;

use crate::scoring::blend::{blended_score, BlendPolicy, SimilarityResult};
use crate::text::{build_ngrams, normalize, split_scripts, Arity, NgramSet, TokenSequence};

/// Raw text paired with an identifier. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Path or label the text came from
    pub id: String,
    pub content: String,
    /// Unicode scalar count of the raw content
    pub char_len: usize,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let char_len = content.chars().count();
        Self {
            id: id.into(),
            content,
            char_len,
        }
    }

    /// Run normalize -> split_scripts -> build_ngrams(2 and 3) over the content.
    pub fn profile(&self) -> DocumentProfile {
        let tokens = split_scripts(&normalize(&self.content));
        let bigrams = build_ngrams(&tokens, Arity::Bigram);
        let trigrams = build_ngrams(&tokens, Arity::Trigram);

        debug!(
            id = %self.id,
            tokens = tokens.len(),
            bigrams = bigrams.len(),
            trigrams = trigrams.len(),
            "Built document profile"
        );

        DocumentProfile {
            char_len: self.char_len,
            tokens,
            bigrams,
            trigrams,
        }
    }
}

/// Everything the scorer needs from one document, computed once.
#[derive(Debug, Clone)]
pub struct DocumentProfile {
    pub char_len: usize,
    pub tokens: TokenSequence,
    pub bigrams: NgramSet,
    pub trigrams: NgramSet,
}

impl DocumentProfile {
    pub fn ngrams(&self, arity: Arity) -> &NgramSet {
        match arity {
            Arity::Bigram => &self.bigrams,
            Arity::Trigram => &self.trigrams,
        }
    }

    /// Blend this profile against another one under `policy`.
    pub fn compare(&self, other: &DocumentProfile, policy: &BlendPolicy) -> SimilarityResult {
        blended_score(
            &self.bigrams,
            &other.bigrams,
            &self.trigrams,
            &other.trigrams,
            self.char_len,
            other.char_len,
            policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        let doc = Document::new("cn", "我爱北京天安门");
        assert_eq!(doc.char_len, 7);
        assert_eq!(doc.content.len(), 21);
    }

    #[test]
    fn test_profile_mixed_text() {
        let profile = Document::new("mixed", "Hello 你好 123").profile();
        assert_eq!(profile.tokens, vec!["Hello", "你", "好", "123"]);
        assert_eq!(profile.ngrams(Arity::Trigram).len(), 2);
        assert!(profile.trigrams.contains("Hello 你 好"));
        assert!(profile.trigrams.contains("你 好 123"));
        assert_eq!(profile.bigrams.len(), 3);
    }

    #[test]
    fn test_profile_empty_document() {
        let profile = Document::new("empty", "").profile();
        assert!(profile.tokens.is_empty());
        assert!(profile.bigrams.is_empty());
        assert!(profile.trigrams.is_empty());
    }
}
