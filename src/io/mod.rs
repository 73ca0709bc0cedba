// Filesystem collaborators: reading input documents and appending answers.
//
// Failures are classified into a small taxonomy so the caller can decide
// what is fatal. A failed read never produces a Document.

pub mod read;
pub mod write;

use std::io;

use thiserror::Error;

pub use read::read_document;
pub use write::append_line;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoErrorKind {
    #[error("not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("not a regular file")]
    NotRegularFile,
    #[error("content is not valid UTF-8")]
    DecodeError,
    #[error("{0}")]
    Unknown(String),
}

impl From<&io::Error> for IoErrorKind {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => IoErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => IoErrorKind::DecodeError,
            _ => IoErrorKind::Unknown(err.to_string()),
        }
    }
}
