// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by catalogue mutation and loading.
//!
//! Every variant is reported before any state changes: a failed add or load
//! leaves the catalogue exactly as it was.

use crate::types::EntryId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    /// An entry with this id is already indexed (or appears twice in a batch).
    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),

    /// The name normalizes to nothing, so it can never be matched.
    #[error("entry {id} has no matchable characters in its name")]
    EmptyName { id: EntryId },

    /// N-gram windows must be at least one character wide.
    #[error("n-gram length must be at least 1, got {0}")]
    InvalidNgramLength(usize),

    /// Thresholds must be comparable with a score.
    #[error("threshold {0} is not a number")]
    InvalidThreshold(f64),

    #[error("failed to read catalogue {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
