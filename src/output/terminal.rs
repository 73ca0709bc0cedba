// Colored terminal output for comparison results and token inspection.

use colored::Colorize;

use crate::document::DocumentProfile;
use crate::pipeline::compare::Comparison;
use crate::text::{Arity, NgramSet};

/// Display a comparison result in the terminal.
pub fn display_comparison(comparison: &Comparison) {
    let result = &comparison.result;

    println!("\n{}", "=== Similarity ===".bold());
    println!(
        "  Original: {} ({} chars)",
        comparison.original_id, comparison.original_chars
    );
    println!(
        "  Suspect:  {} ({} chars)",
        comparison.suspect_id, comparison.suspect_chars
    );
    println!();

    let score = result.display_score();
    println!("  Score: {}", colorize_score(result.score, &score));

    let trigram = if result.trigram_included {
        format!("{:.4}", result.trigram)
    } else {
        "skipped (both documents long)".to_string()
    };
    println!(
        "  {}",
        format!("2-gram {:.4} x 0.4 | 3-gram {trigram} x 0.6", result.bigram).dimmed()
    );
    println!();
}

/// Display one document's tokens and n-gram sets, showing at most `limit` items each.
pub fn display_profile(id: &str, profile: &DocumentProfile, limit: usize) {
    println!(
        "\n{}",
        format!("=== {id} ({} chars, {} tokens) ===", profile.char_len, profile.tokens.len())
            .bold()
    );

    println!("  Tokens: {}", super::token_preview(&profile.tokens, limit));

    for arity in [Arity::Bigram, Arity::Trigram] {
        display_ngrams(arity, profile.ngrams(arity), limit);
    }
    println!();
}

fn display_ngrams(arity: Arity, set: &NgramSet, limit: usize) {
    let mut sorted: Vec<&String> = set.iter().collect();
    sorted.sort();

    println!("  {}-grams ({}):", arity.width(), set.len());
    for gram in sorted.iter().take(limit) {
        println!("    {}", gram.dimmed());
    }
    if set.len() > limit {
        println!("    {}", format!("... {} more", set.len() - limit).dimmed());
    }
}

/// Color a formatted score by how much overlap it signals.
fn colorize_score(score: f64, text: &str) -> colored::ColoredString {
    if score >= 0.75 {
        text.red().bold()
    } else if score >= 0.40 {
        text.yellow()
    } else {
        text.green()
    }
}
