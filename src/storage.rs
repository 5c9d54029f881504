//! Collection persistence
//!
//! Serializes the in-memory collection to indented JSON. URL fields are
//! always written in their flattened string form, so a collection loaded
//! with object-shaped URLs is saved without them.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::models::Collection;

/// Write the collection as indented JSON, overwriting any existing file.
///
/// Plain write: a crash mid-write leaves a partial file behind.
pub fn save_collection(collection: &Collection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(collection)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "Collection saved");
    Ok(())
}
