// Script classification helpers shared by the normalizer and the splitter.
//
// Only three character classes are recognized: CJK ideographs in the
// U+4E00..=U+9FA5 block, ASCII letters, and ASCII digits. Everything else is
// noise as far as overlap scoring is concerned.

use std::ops::RangeInclusive;

/// The CJK Unified Ideographs range recognized by the pipeline.
pub const CJK_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FA5}';

/// The script a single character or a whole token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cjk,
    Latin,
    Digit,
    /// Empty, mixed, or unrecognized content.
    Other,
}

#[inline]
pub fn is_cjk(c: char) -> bool {
    CJK_RANGE.contains(&c)
}

/// Characters that survive the first normalization pass.
#[inline]
pub fn is_retained(c: char) -> bool {
    is_cjk(c) || c.is_ascii_alphanumeric() || c.is_whitespace()
}

/// Classify a single character.
pub fn char_script(c: char) -> Script {
    if is_cjk(c) {
        Script::Cjk
    } else if c.is_ascii_alphabetic() {
        Script::Latin
    } else if c.is_ascii_digit() {
        Script::Digit
    } else {
        Script::Other
    }
}

/// Classify a token by the script all of its characters share.
///
/// Returns `Script::Other` for an empty token or one that mixes scripts.
pub fn token_script(token: &str) -> Script {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return Script::Other;
    };

    let script = char_script(first);
    if chars.all(|c| char_script(c) == script) {
        script
    } else {
        Script::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_block_bounds() {
        assert!(is_cjk('\u{4E00}'));
        assert!(is_cjk('\u{9FA5}'));
        assert!(!is_cjk('\u{4DFF}'));
        // Inside the wider Unified Ideographs block but past U+9FA5
        assert!(!is_cjk('\u{9FA6}'));
    }

    #[test]
    fn test_token_script_pure() {
        assert_eq!(token_script("你好"), Script::Cjk);
        assert_eq!(token_script("Hello"), Script::Latin);
        assert_eq!(token_script("123"), Script::Digit);
    }

    #[test]
    fn test_token_script_mixed_and_empty() {
        assert_eq!(token_script("abc123"), Script::Other);
        assert_eq!(token_script("你a"), Script::Other);
        assert_eq!(token_script(""), Script::Other);
        assert_eq!(token_script("é"), Script::Other);
    }

    #[test]
    fn test_retained_characters() {
        assert!(is_retained('z'));
        assert!(is_retained('7'));
        assert!(is_retained('\t'));
        assert!(is_retained('京'));
        assert!(!is_retained('!'));
        assert!(!is_retained('，'));
        assert!(!is_retained('ü'));
    }
}
