// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types for catalogue search.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique key of a catalogue entry.
pub type EntryId = i64;

/// Default opaque payload: whatever JSON the catalogue attached to the entry.
pub type Event = serde_json::Value;

/// N-gram → occurrence count within one source string.
pub type NgramFreq = HashMap<String, usize>;

/// One catalogue item. Only `name` takes part in matching; `event` is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<E = Event> {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub event: E,
}

impl<E> Entry<E> {
    pub fn new(id: EntryId, name: impl Into<String>, event: E) -> Self {
        Self {
            id,
            name: name.into(),
            event,
        }
    }
}

impl<E> fmt::Display for Entry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// A score attached to an entry id: the ranking currency between scoring and
/// selection.
///
/// Ordered so that *greater ranks higher*: higher score first, then lower id.
/// See [`crate::scoring::ranking`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredId {
    pub id: EntryId,
    /// Composite similarity in [0, 1].
    pub score: f64,
}

/// A search hit: the matched entry and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<'a, E = Event> {
    pub entry: &'a Entry<E>,
    pub score: f64,
}

/// Owned search hit, for callers that cannot hold a borrow of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedResult<E = Event> {
    pub entry: Entry<E>,
    pub score: f64,
}

impl<E: Clone> From<ScoredResult<'_, E>> for OwnedResult<E> {
    fn from(result: ScoredResult<'_, E>) -> Self {
        Self {
            entry: result.entry.clone(),
            score: result.score,
        }
    }
}

/// Per-query knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Capacity of the result list. Zero means no results.
    pub max_results: usize,
    /// Inclusive similarity floor: keep a hit iff `score >= threshold`.
    pub threshold: f64,
    /// Layer TF-IDF relevance over the composite score.
    pub weighted: bool,
}

/// Results returned when the caller does not say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Keep every scored entry.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            threshold: DEFAULT_THRESHOLD,
            weighted: false,
        }
    }
}

impl SearchOptions {
    pub fn new(max_results: usize, threshold: f64) -> Self {
        Self {
            max_results,
            threshold,
            ..Self::default()
        }
    }

    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Reject thresholds no score can be compared against.
    pub fn validate(&self) -> crate::Result<()> {
        if self.threshold.is_nan() {
            return Err(crate::CatalogueError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
