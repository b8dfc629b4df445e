//! Export — JSON rendering of normalised records and the output writer.
//!
//! Output is a JSON array of row objects, 2-space indented, no trailing
//! newline. Key order follows each [`Record`](crate::Record), so identical
//! input renders byte-identical text.

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::types::Record;

/// Render records as an indented JSON array.
pub fn to_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write rendered JSON to `path`, replacing any existing content.
pub fn write_json(path: &Path, json: &str) -> Result<(), ExportError> {
    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote json");
    Ok(())
}
