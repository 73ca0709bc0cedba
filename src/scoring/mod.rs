// Similarity scoring: set-level Jaccard and the blended 2-gram/3-gram score.

pub mod blend;
pub mod jaccard;
