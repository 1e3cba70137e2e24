use crate::error::ConvertResult;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render records as a pretty-printed JSON array (2-space indent,
/// non-ASCII kept literal, no trailing newline)
pub fn to_json<T: Serialize>(records: &[T]) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, creating parent directories and overwriting
/// any existing file
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> ConvertResult<()> {
    let content = to_json(records)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "json written"
    );
    Ok(())
}
