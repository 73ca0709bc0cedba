// Pipelines that drive the text and scoring stages over whole documents.

pub mod compare;
