// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalogue file loading.
//!
//! Parsing is all-or-nothing: a file either yields every entry or an error,
//! never a prefix. Validation against an existing catalogue (duplicate ids,
//! unmatchable names) happens later, in `Catalogue::extend_entries`.

mod document;

pub use document::*;

use crate::error::{CatalogueError, Result};
use crate::types::Entry;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse catalogue JSON into entries.
pub fn parse_catalogue<E: DeserializeOwned + Default>(json: &str) -> Result<Vec<Entry<E>>> {
    let document: CatalogueDocument<E> = serde_json::from_str(json)?;
    Ok(document.into_entries())
}

/// Read and parse a catalogue file.
pub fn read_catalogue<E: DeserializeOwned + Default>(path: &Path) -> Result<Vec<Entry<E>>> {
    let content = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_catalogue(&content)?;
    debug!(path = %path.display(), entries = entries.len(), "parsed catalogue file");
    Ok(entries)
}
