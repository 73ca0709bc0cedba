// Normalizer: raw text -> script-homogeneous token sequence.
//
// Anything that is not a CJK ideograph, ASCII letter, ASCII digit, or
// whitespace is dropped. The remainder is split on whitespace, and each chunk
// is broken further wherever scripts touch without a space ("abc123" becomes
// "abc", "123").

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use super::script::is_retained;
use super::TokenSequence;

// U+4E00 ..= U+9FA5, then ASCII letters, then ASCII digits.
static SCRIPT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{4E00}-\u{9FA5}]+|[a-zA-Z]+|[0-9]+").expect("script run pattern is valid")
});

/// Normalize raw text into an ordered sequence of script-homogeneous tokens.
///
/// Total over all inputs: text with nothing recognizable yields an empty
/// sequence.
pub fn normalize(text: &str) -> TokenSequence {
    let retained: String = text.chars().filter(|&c| is_retained(c)).collect();

    let tokens: TokenSequence = retained
        .split_whitespace()
        .flat_map(|chunk| SCRIPT_RUN.find_iter(chunk).map(|m| m.as_str().to_string()))
        .collect();

    debug!(
        input_chars = text.chars().count(),
        tokens = tokens.len(),
        "Normalized text"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_punctuation() {
        assert!(normalize("").is_empty());
        assert!(normalize("!@#$%^&*()").is_empty());
        assert!(normalize("   \n\t ").is_empty());
    }

    #[test]
    fn test_mixed_scripts_with_spaces() {
        assert_eq!(normalize("Hello 你好 123"), vec!["Hello", "你好", "123"]);
    }

    #[test]
    fn test_glued_scripts_are_split() {
        assert_eq!(normalize("abc123你好def"), vec!["abc", "123", "你好", "def"]);
    }

    #[test]
    fn test_punctuation_inside_chunk_joins_neighbours() {
        // Stripping happens before splitting, so "don't" collapses to one run
        assert_eq!(normalize("don't stop"), vec!["dont", "stop"]);
        assert_eq!(normalize("你好，世界。"), vec!["你好世界"]);
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert_eq!(normalize("café naïve"), vec!["caf", "nave"]);
    }
}
