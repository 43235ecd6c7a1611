//! Loading and saving comment files.
//!
//! Input is one JSON array of comment objects, read fully into memory.

use crate::analytics::annotate_scream_index;
use crate::core::{CommentRecord, Error, Result};
use std::fs;
use std::path::Path;

/// Parse comment records from JSON text. `origin` is only used in error messages.
pub fn parse_records(contents: &str, origin: &Path) -> Result<Vec<CommentRecord>> {
    serde_json::from_str(contents).map_err(|e| Error::parse(origin, &e))
}

/// Read and parse a comment file.
pub fn load_records(path: &Path) -> Result<Vec<CommentRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    let records = parse_records(&contents, path)?;
    tracing::info!(path = %path.display(), comments = records.len(), "loaded comments");
    Ok(records)
}

/// Serialize records as pretty JSON with non-ASCII text kept as is.
pub fn records_to_json(records: &[CommentRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Replace the contents of `path` with `records`.
pub fn save_records(path: &Path, records: &[CommentRecord]) -> Result<()> {
    fs::write(path, records_to_json(records)?)?;
    tracing::debug!(path = %path.display(), comments = records.len(), "saved comments");
    Ok(())
}

/// Compute the scream index for every comment in `path` and rewrite the file
/// in place. Returns the number of annotated comments.
pub fn annotate_file(path: &Path) -> Result<usize> {
    let records = load_records(path)?;
    let annotated = annotate_scream_index(&records);
    save_records(path, &annotated)?;
    Ok(annotated.len())
}
