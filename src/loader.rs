//! Record loading
//!
//! Reads a record store snapshot from the JSON document an interchange
//! parser emits: `{ "individuals": [...], "families": [...] }`.

use crate::collections::RecordStore;
use crate::error::{AuditError, Result};
use crate::models::{Family, Individual};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordDocument {
    individuals: Vec<Individual>,
    families: Vec<Family>,
}

/// Load a record store from a JSON file
pub fn load_records(path: &Path) -> Result<RecordStore> {
    log_operation_start("Loading records from", &path.display().to_string());
    let start = Instant::now();

    let content = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_records(&content, path)?;

    log_operation_complete(
        "loading",
        &path.display().to_string(),
        store.individual_count() + store.family_count(),
        Some(start.elapsed()),
    );
    Ok(store)
}

/// Build a record store from a JSON string
///
/// `origin` only names the document in error messages.
pub fn parse_records(json: &str, origin: &Path) -> Result<RecordStore> {
    let document: RecordDocument =
        serde_json::from_str(json).map_err(|source| AuditError::Parse {
            path: PathBuf::from(origin),
            source,
        })?;
    let store = RecordStore::from_records(document.individuals, document.families)?;

    for (family, id) in store.dangling_references() {
        log_warning(
            &format!("Family {family} references an individual that is not loaded"),
            Some(id.as_str()),
        );
    }
    Ok(store)
}
