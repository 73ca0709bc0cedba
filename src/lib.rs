// dupecheck: n-gram overlap scoring between two text documents.
//
// This is the library root. The text and scoring modules are the pure core;
// io, output, and profiling are the collaborators the binary wires around it.

pub mod config;
pub mod document;
pub mod io;
pub mod output;
pub mod pipeline;
pub mod profiling;
pub mod scoring;
pub mod text;

pub use document::{Document, DocumentProfile};
pub use scoring::blend::{score_pair, BlendPolicy, SimilarityResult};
pub use scoring::jaccard::jaccard;
pub use text::{build_ngrams, normalize, split_scripts, Arity, NgramSet, TokenSequence};
