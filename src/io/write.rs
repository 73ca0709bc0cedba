// Text-writing collaborator: appends one formatted line to the answer file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::IoErrorKind;

#[derive(Debug, Error)]
#[error("cannot write '{}': {kind}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub kind: IoErrorKind,
}

/// Append `line` (plus a trailing newline) to `path`, creating the file if needed.
pub async fn append_line(path: &Path, line: &str) -> Result<(), WriteError> {
    let fail = |kind| WriteError {
        path: path.to_path_buf(),
        kind,
    };

    if let Ok(metadata) = tokio::fs::metadata(path).await {
        if !metadata.is_file() {
            return Err(fail(IoErrorKind::NotRegularFile));
        }
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| fail(IoErrorKind::from(&e)))?;

    file.write_all(format!("{line}\n").as_bytes())
        .await
        .map_err(|e| fail(IoErrorKind::from(&e)))?;
    file.flush().await.map_err(|e| fail(IoErrorKind::from(&e)))?;

    debug!(path = %path.display(), "Appended answer line");
    Ok(())
}
