// NgramBuilder: sliding-window n-gram sets over a token sequence.
//
// Each window of n consecutive tokens is joined with a single space and
// inserted into a set, so repeated windows collapse. A sequence of length L
// produces at most max(0, L - n + 1) members.

use std::collections::HashSet;

use thiserror::Error;

/// A deduplicated set of space-joined n-grams of one arity.
pub type NgramSet = HashSet<String>;

/// Window widths the scorer knows how to blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Bigram = 2,
    Trigram = 3,
}

impl Arity {
    pub fn width(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArityError {
    #[error("unsupported n-gram width {0}, expected 2 or 3")]
    Unsupported(usize),
}

impl TryFrom<usize> for Arity {
    type Error = ArityError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(Arity::Bigram),
            3 => Ok(Arity::Trigram),
            other => Err(ArityError::Unsupported(other)),
        }
    }
}

/// Build the n-gram set for `tokens`. Shorter-than-n input yields an empty set.
pub fn build_ngrams(tokens: &[String], arity: Arity) -> NgramSet {
    tokens
        .windows(arity.width())
        .map(|window| window.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trigrams_over_chars() {
        let tokens = toks(&["我", "爱", "北", "京", "天", "安", "门"]);
        let grams = build_ngrams(&tokens, Arity::Trigram);
        let expected: NgramSet = ["我 爱 北", "爱 北 京", "北 京 天", "京 天 安", "天 安 门"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(grams, expected);
    }

    #[test]
    fn test_short_sequence_is_empty() {
        assert!(build_ngrams(&toks(&["a"]), Arity::Bigram).is_empty());
        assert!(build_ngrams(&toks(&["a", "b"]), Arity::Trigram).is_empty());
        assert!(build_ngrams(&[], Arity::Bigram).is_empty());
    }

    #[test]
    fn test_repeated_windows_collapse() {
        let grams = build_ngrams(&toks(&["a", "b", "a", "b", "a"]), Arity::Bigram);
        assert_eq!(grams.len(), 2);
        assert!(grams.contains("a b"));
        assert!(grams.contains("b a"));
    }

    #[test]
    fn test_arity_try_from() {
        assert_eq!(Arity::try_from(2), Ok(Arity::Bigram));
        assert_eq!(Arity::try_from(3), Ok(Arity::Trigram));
        assert_eq!(Arity::try_from(4), Err(ArityError::Unsupported(4)));
        assert_eq!(Arity::try_from(0), Err(ArityError::Unsupported(0)));
    }
}
