use std::path::Path;

use crate::error::TrackerError;
use crate::models::IpRecord;
use crate::store::RecordStore;

/// Write the whole store to `path` as an indented JSON array, overwriting
/// whatever was there.
pub fn save_records(store: &RecordStore, path: &Path) -> Result<(), TrackerError> {
    let serialized = serde_json::to_string_pretty(store.records())?;
    std::fs::write(path, serialized)?;
    tracing::info!(records = store.len(), path = %path.display(), "saved data file");
    Ok(())
}

/// Read a previously saved file back as a full record set. The caller
/// replaces the store only on success; a missing path reports
/// `FileNotFound` and a file that does not parse reports the parse error,
/// leaving the store as it was in both cases. Records with missing fields
/// come back with the sentinel defaults; unknown fields are ignored.
pub fn load_records(path: &Path) -> Result<Vec<IpRecord>, TrackerError> {
    if !path.exists() {
        return Err(TrackerError::FileNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    let records: Vec<IpRecord> = serde_json::from_str(&text)?;
    tracing::info!(records = records.len(), path = %path.display(), "loaded data file");
    Ok(records)
}
