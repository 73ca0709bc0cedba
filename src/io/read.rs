// Text-reading collaborator.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::IoErrorKind;
use crate::document::Document;

#[derive(Debug, Error)]
#[error("cannot read '{}': {kind}", .path.display())]
pub struct ReadError {
    pub path: PathBuf,
    pub kind: IoErrorKind,
}

impl ReadError {
    fn new(path: &Path, kind: IoErrorKind) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
        }
    }

    /// Missing inputs are fatal; everything else is a local read failure.
    pub fn is_not_found(&self) -> bool {
        self.kind == IoErrorKind::NotFound
    }
}

/// Read a UTF-8 text file into a Document identified by its path.
pub async fn read_document(path: &Path) -> Result<Document, ReadError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ReadError::new(path, IoErrorKind::from(&e)))?;

    if !metadata.is_file() {
        return Err(ReadError::new(path, IoErrorKind::NotRegularFile));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ReadError::new(path, IoErrorKind::from(&e)))?;

    let content =
        String::from_utf8(bytes).map_err(|_| ReadError::new(path, IoErrorKind::DecodeError))?;

    debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(Document::new(path.display().to_string(), content))
}
