use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{error, info};

use dupecheck::config::{Config, ReportFormat};
use dupecheck::io::read::ReadError;
use dupecheck::profiling::Profiler;

/// dupecheck: estimate textual overlap between two documents.
///
/// Scores the pair with blended 2-gram and 3-gram Jaccard similarity over
/// script-aware tokens (CJK per character, Latin words, digit runs).
#[derive(Parser)]
#[command(name = "dupecheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files and report their similarity
    Compare {
        /// The original document
        original: PathBuf,

        /// The document suspected of copying the original
        suspect: PathBuf,

        /// Append the result line to this file (defaults to DUPECHECK_ANSWER_PATH)
        answer: Option<PathBuf>,

        /// Print a JSON report instead of colored text
        #[arg(long)]
        json: bool,

        /// Write stage timings to this file (defaults to DUPECHECK_PROFILE_PATH)
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Show the tokens and n-gram sets extracted from one file
    Tokens {
        file: PathBuf,

        /// Max items to show per section (default: 20)
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dupecheck=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            original,
            suspect,
            answer,
            json,
            profile,
        } => {
            let format = if json {
                ReportFormat::Json
            } else {
                config.report_format
            };
            let answer = answer.or_else(|| config.answer_path.clone());

            match profile.or_else(|| config.profile_path.clone()) {
                Some(path) => {
                    let mut profiler = Profiler::new(path);
                    run_compare(&original, &suspect, answer.as_deref(), format, Some(&mut profiler))
                        .await?;
                    profiler.finish()?;
                }
                None => {
                    run_compare(&original, &suspect, answer.as_deref(), format, None).await?;
                }
            }
        }

        Commands::Tokens { file, limit } => {
            let document = load(&file).await?;
            let profile = document.profile();
            dupecheck::output::terminal::display_profile(&document.id, &profile, limit);
        }
    }

    Ok(())
}

/// Read both documents, score them, print the result, and append the answer line.
async fn run_compare(
    original: &Path,
    suspect: &Path,
    answer: Option<&Path>,
    format: ReportFormat,
    mut profiler: Option<&mut Profiler>,
) -> Result<()> {
    let read_both = async { tokio::try_join!(load(original), load(suspect)) };
    let (doc_a, doc_b) = match profiler.as_deref_mut() {
        Some(p) => p.time("read", read_both).await?,
        None => read_both.await?,
    };

    info!(
        original = %doc_a.id,
        original_chars = doc_a.char_len,
        suspect = %doc_b.id,
        suspect_chars = doc_b.char_len,
        "Loaded documents"
    );

    let policy = dupecheck::BlendPolicy::default();
    let scoring = dupecheck::pipeline::compare::compare_concurrent(
        Arc::new(doc_a),
        Arc::new(doc_b),
        policy,
    );
    let comparison = match profiler.as_deref_mut() {
        Some(p) => p.time("compare", scoring).await?,
        None => scoring.await?,
    };

    match format {
        ReportFormat::Text => dupecheck::output::terminal::display_comparison(&comparison),
        ReportFormat::Json => println!("{}", dupecheck::output::report::to_json(&comparison)?),
    }

    if let Some(path) = answer {
        let line = dupecheck::output::answer_line(&comparison.result);
        let write = dupecheck::io::append_line(path, &line);
        let written = match profiler.as_deref_mut() {
            Some(p) => p.time("write", write).await,
            None => write.await,
        };

        if let Err(e) = written {
            error!(path = %e.path.display(), kind = %e.kind, "Failed to write answer");
            return Err(e).context("answer file not updated");
        }

        if format == ReportFormat::Text {
            println!("{}", format!("Result appended to {}", path.display()).dimmed());
        }
    }

    Ok(())
}

/// Read one input document.
///
/// A missing file is a hard failure. Other read failures are logged before
/// aborting, so a half-read document never reaches the pipeline.
async fn load(path: &Path) -> Result<dupecheck::Document> {
    dupecheck::io::read_document(path).await.map_err(|e: ReadError| {
        if !e.is_not_found() {
            error!(path = %e.path.display(), kind = %e.kind, "Failed to read input");
        }
        anyhow::Error::new(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_requires_both_documents() {
        assert!(Cli::try_parse_from(["dupecheck", "compare", "only_one.txt"]).is_err());
        assert!(Cli::try_parse_from(["dupecheck"]).is_err());
    }

    #[test]
    fn compare_parses_two_paths_without_answer() {
        let cli = Cli::try_parse_from(["dupecheck", "compare", "a.txt", "b.txt"]).unwrap();
        match cli.command {
            Commands::Compare {
                original,
                suspect,
                answer,
                json,
                profile,
            } => {
                assert_eq!(original, PathBuf::from("a.txt"));
                assert_eq!(suspect, PathBuf::from("b.txt"));
                assert!(answer.is_none());
                assert!(!json);
                assert!(profile.is_none());
            }
            Commands::Tokens { .. } => panic!("expected compare"),
        }
    }

    #[test]
    fn compare_accepts_answer_and_flags() {
        let cli = Cli::try_parse_from([
            "dupecheck", "compare", "a.txt", "b.txt", "ans.txt", "--json", "--profile", "p.json",
        ])
        .unwrap();
        let Commands::Compare {
            answer,
            json,
            profile,
            ..
        } = cli.command
        else {
            panic!("expected compare");
        };
        assert_eq!(answer, Some(PathBuf::from("ans.txt")));
        assert!(json);
        assert_eq!(profile, Some(PathBuf::from("p.json")));
    }
}
