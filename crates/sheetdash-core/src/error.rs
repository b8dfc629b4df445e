//! Error types surfaced by sheetdash-core.

use std::path::PathBuf;

/// Failure to serialize or persist an output file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize records to JSON")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
