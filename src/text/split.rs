// ScriptSplitter: explodes pure-CJK tokens into single characters.
//
// CJK text has no spaces between words, so overlap is measured per
// character. Latin words, digit runs, and anything mixed pass through intact.

use super::script::{token_script, Script};
use super::TokenSequence;

/// Expand every pure-CJK token into one token per character, in place.
pub fn split_scripts(tokens: &[String]) -> TokenSequence {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token_script(token) {
            Script::Cjk => out.extend(token.chars().map(String::from)),
            Script::Latin | Script::Digit | Script::Other => out.push(token.clone()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cjk_exploded() {
        assert_eq!(split_scripts(&toks(&["你好"])), vec!["你", "好"]);
    }

    #[test]
    fn test_latin_and_digits_unchanged() {
        assert_eq!(split_scripts(&toks(&["Hello"])), vec!["Hello"]);
        assert_eq!(split_scripts(&toks(&["123"])), vec!["123"]);
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(
            split_scripts(&toks(&["Hello", "你好", "123"])),
            vec!["Hello", "你", "好", "123"]
        );
    }

    #[test]
    fn test_mixed_token_passes_through() {
        assert_eq!(split_scripts(&toks(&["a你"])), vec!["a你"]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(split_scripts(&[]).is_empty());
    }
}
