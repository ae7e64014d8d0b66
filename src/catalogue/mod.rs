// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalogue: entries by id, kept in step with their n-gram caches.
//!
//! Entries and `CorpusIndex` rows are created together and never mutated
//! afterward. Every mutating call validates fully before it writes, so a
//! failed add or load leaves both untouched.
//!
//! ```
//! use catfind::{Catalogue, Event};
//!
//! let mut catalogue = Catalogue::new();
//! catalogue.add_entry(1, "Chinese Language", Event::Null).unwrap();
//! catalogue.add_entry(2, "Chinese Literature", Event::Null).unwrap();
//! catalogue.add_entry(3, "Calculus I", Event::Null).unwrap();
//!
//! let hits = catalogue.search("chinese", 10, 0.0);
//! assert_eq!(hits[0].entry.id, 1);
//! assert_eq!(hits[2].entry.id, 3);
//! ```

#[cfg(feature = "parallel")]
mod shared;

#[cfg(feature = "parallel")]
pub use shared::SharedCatalogue;

use crate::build::read_catalogue;
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::search::rank;
use crate::types::{Entry, EntryId, Event, ScoredResult, SearchOptions};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Named entries plus the caches that make them searchable.
#[derive(Debug, Clone)]
pub struct Catalogue<E = Event> {
    entries: HashMap<EntryId, Entry<E>>,
    index: CorpusIndex,
}

impl<E> Default for Catalogue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Catalogue<E> {
    pub fn new() -> Self {
        Self::with_index(CorpusIndex::new())
    }

    /// Empty catalogue matching on windows of `ngram_len` characters.
    pub fn with_ngram_len(ngram_len: usize) -> Result<Self> {
        Ok(Self::with_index(CorpusIndex::with_ngram_len(ngram_len)?))
    }

    fn with_index(index: CorpusIndex) -> Self {
        Self {
            entries: HashMap::new(),
            index,
        }
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry<E>> {
        self.entries.get(&id)
    }

    /// All ids, ascending.
    pub fn ids(&self) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<E>> + '_ {
        self.entries.values()
    }

    /// The n-gram caches behind this catalogue.
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Add one entry.
    ///
    /// Fails on a duplicate id or a name with nothing matchable in it; on
    /// failure the catalogue is unchanged.
    pub fn add_entry(&mut self, id: EntryId, name: impl Into<String>, event: E) -> Result<()> {
        self.add(Entry::new(id, name, event))
    }

    pub fn add(&mut self, entry: Entry<E>) -> Result<()> {
        self.index.insert(entry.id, &entry.name)?;
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    /// Add a batch of entries, all or nothing. Returns how many were added.
    pub fn extend_entries(&mut self, entries: Vec<Entry<E>>) -> Result<usize> {
        let names: Vec<(EntryId, &str)> = entries.iter().map(|e| (e.id, e.name.as_str())).collect();
        let rows = self.index.prepare_batch(&names)?;

        // Validation is over; nothing below can fail
        let added = entries.len();
        self.index.commit_batch(rows);
        self.entries.reserve(added);
        for entry in entries {
            self.entries.insert(entry.id, entry);
        }
        Ok(added)
    }

    /// Best matches for `query`: at most `max_results` entries with score at
    /// least `threshold`, best first, equal scores by ascending id.
    pub fn search(&self, query: &str, max_results: usize, threshold: f64) -> Vec<ScoredResult<'_, E>> {
        self.search_with(query, &SearchOptions::new(max_results, threshold))
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<ScoredResult<'_, E>> {
        rank(&self.index, query, options)
            .into_iter()
            .filter_map(|hit| {
                self.entries.get(&hit.id).map(|entry| ScoredResult {
                    entry,
                    score: hit.score,
                })
            })
            .collect()
    }
}

impl<E: DeserializeOwned + Default> Catalogue<E> {
    /// Build a catalogue from a JSON catalogue file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut catalogue = Self::new();
        catalogue.load(path)?;
        Ok(catalogue)
    }

    /// Load a JSON catalogue file into this catalogue.
    ///
    /// All or nothing: on any read, parse, or validation error the
    /// catalogue is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let entries = read_catalogue(path)?;
        let added = self.extend_entries(entries)?;
        info!(path = %path.display(), added, total = self.size(), "loaded catalogue");
        Ok(added)
    }

    /// Load catalogue JSON from a string. Same guarantees as [`load`](Self::load).
    pub fn load_str(&mut self, json: &str) -> Result<usize> {
        let entries = crate::build::parse_catalogue(json)?;
        let added = self.extend_entries(entries)?;
        debug!(added, total = self.size(), "loaded catalogue from string");
        Ok(added)
    }
}

impl<E> fmt::Display for Catalogue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "catalogue of {} entries ({} distinct {}-grams)",
            self.size(),
            self.index.aggregate().distinct(),
            self.index.ngram_len()
        )
    }
}
