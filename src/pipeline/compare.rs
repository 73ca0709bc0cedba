// Pairwise comparison pipeline.
//
// The two documents are independent until the final scoring step, so the
// async entry point builds both profiles concurrently on the blocking pool
// and only joins them to blend.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::document::{Document, DocumentProfile};
use crate::scoring::blend::{BlendPolicy, SimilarityResult};

/// A scored pair of documents.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub original_id: String,
    pub suspect_id: String,
    pub original_chars: usize,
    pub suspect_chars: usize,
    pub result: SimilarityResult,
}

impl Comparison {
    fn from_profiles(
        original: &Document,
        suspect: &Document,
        profile_a: &DocumentProfile,
        profile_b: &DocumentProfile,
        policy: &BlendPolicy,
    ) -> Self {
        let result = profile_a.compare(profile_b, policy);

        info!(
            original = %original.id,
            suspect = %suspect.id,
            score = result.score,
            "Compared documents"
        );

        Self {
            original_id: original.id.clone(),
            suspect_id: suspect.id.clone(),
            original_chars: original.char_len,
            suspect_chars: suspect.char_len,
            result,
        }
    }
}

/// Compare two documents on the current thread.
pub fn compare(original: &Document, suspect: &Document, policy: &BlendPolicy) -> Comparison {
    let profile_a = original.profile();
    let profile_b = suspect.profile();
    Comparison::from_profiles(original, suspect, &profile_a, &profile_b, policy)
}

/// Compare two documents, profiling both in parallel on tokio's blocking pool.
pub async fn compare_concurrent(
    original: Arc<Document>,
    suspect: Arc<Document>,
    policy: BlendPolicy,
) -> Result<Comparison> {
    let doc_a = Arc::clone(&original);
    let doc_b = Arc::clone(&suspect);

    let (profile_a, profile_b) = tokio::try_join!(
        tokio::task::spawn_blocking(move || doc_a.profile()),
        tokio::task::spawn_blocking(move || doc_b.profile()),
    )
    .context("spawn_blocking panicked")?;

    Ok(Comparison::from_profiles(
        &original, &suspect, &profile_a, &profile_b, &policy,
    ))
}
