// Text pipeline: normalization, script splitting, and n-gram construction.
//
// Each stage is a pure function over the previous stage's output:
//
//   raw text -> normalize -> split_scripts -> build_ngrams(2 | 3)

pub mod ngram;
pub mod normalize;
pub mod script;
pub mod split;

pub use ngram::{build_ngrams, Arity, ArityError, NgramSet};
pub use normalize::normalize;
pub use split::split_scripts;

/// An ordered sequence of non-empty tokens.
pub type TokenSequence = Vec<String>;
