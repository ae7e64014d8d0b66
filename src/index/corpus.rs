// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus caches: per-entry n-gram profiles and their running aggregate.
//!
//! Two structures move in lockstep:
//!
//! - **rows**: entry id → `NameProfile` (normalized name + n-gram counts)
//! - **aggregate**: element-wise sum of every row's n-gram counts
//!
//! # Invariant
//!
//! `aggregate.counts == Σ rows[id].grams` at every observable point. The only
//! mutation path is `commit`, which writes the row and sums it into the
//! aggregate together; everything fallible happens before it. A duplicate id
//! or an unmatchable name therefore never leaves an entry half indexed.

use super::CorpusAggregate;
use crate::error::{CatalogueError, Result};
use crate::fuzzy::DEFAULT_NGRAM_LEN;
use crate::scoring::NameProfile;
use crate::search::top_k::TopK;
use crate::types::{EntryId, NgramFreq};
use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-entry n-gram cache plus corpus aggregate.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    ngram_len: usize,
    rows: HashMap<EntryId, NameProfile>,
    aggregate: CorpusAggregate,
}

impl Default for CorpusIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusIndex {
    /// Empty index over trigrams.
    pub fn new() -> Self {
        Self {
            ngram_len: DEFAULT_NGRAM_LEN,
            rows: HashMap::new(),
            aggregate: CorpusAggregate::default(),
        }
    }

    /// Empty index over windows of `ngram_len` characters.
    pub fn with_ngram_len(ngram_len: usize) -> Result<Self> {
        if ngram_len == 0 {
            return Err(CatalogueError::InvalidNgramLength(ngram_len));
        }
        Ok(Self {
            ngram_len,
            ..Self::new()
        })
    }

    pub fn ngram_len(&self) -> usize {
        self.ngram_len
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Cached profile of one entry.
    pub fn profile(&self, id: EntryId) -> Option<&NameProfile> {
        self.rows.get(&id)
    }

    /// Cached n-gram counts of one entry.
    pub fn grams(&self, id: EntryId) -> Option<&NgramFreq> {
        self.rows.get(&id).map(|row| &row.grams)
    }

    pub fn aggregate(&self) -> &CorpusAggregate {
        &self.aggregate
    }

    /// Every cached row, in no particular order.
    pub fn rows(&self) -> impl Iterator<Item = (EntryId, &NameProfile)> + '_ {
        self.rows.iter().map(|(&id, row)| (id, row))
    }

    /// Profile a query string with this index's window width.
    pub fn profile_query(&self, query: &str) -> NameProfile {
        NameProfile::new(query, self.ngram_len)
    }

    /// Index one name under `id`.
    ///
    /// Fails with `DuplicateId` or `EmptyName`; on failure nothing changes.
    pub fn insert(&mut self, id: EntryId, name: &str) -> Result<()> {
        if self.contains(id) {
            return Err(CatalogueError::DuplicateId(id));
        }
        let profile = self.prepare(id, name)?;
        self.commit(id, profile);
        Ok(())
    }

    /// Validate and profile a whole batch without touching the index.
    ///
    /// Rejects ids already indexed, ids repeated within the batch, and names
    /// that normalize to nothing. The returned rows go to
    /// [`commit_batch`](Self::commit_batch).
    pub fn prepare_batch(&self, items: &[(EntryId, &str)]) -> Result<Vec<(EntryId, NameProfile)>> {
        let mut seen = HashSet::with_capacity(items.len());
        for &(id, _) in items {
            if self.contains(id) || !seen.insert(id) {
                return Err(CatalogueError::DuplicateId(id));
            }
        }

        #[cfg(feature = "parallel")]
        let iter = items.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = items.iter();

        iter.map(|&(id, name)| self.prepare(id, name).map(|profile| (id, profile)))
            .collect()
    }

    /// Install rows produced by [`prepare_batch`](Self::prepare_batch).
    ///
    /// Infallible: all validation already happened. Rows must come from a
    /// `prepare_batch` call on this index with no mutation in between.
    pub fn commit_batch(&mut self, rows: Vec<(EntryId, NameProfile)>) {
        self.rows.reserve(rows.len());
        for (id, profile) in rows {
            self.commit(id, profile);
        }
    }

    /// The `n` most frequent n-grams across the corpus, most frequent first.
    /// Equal counts order alphabetically.
    pub fn top_ngrams(&self, n: usize) -> Vec<(String, usize)> {
        let mut top = TopK::new(n);
        for (gram, &count) in self.aggregate.counts() {
            // Reverse on the gram so that, among equal counts, the
            // alphabetically first one is the greatest.
            top.push((count, std::cmp::Reverse(gram.as_str())));
        }
        top.into_sorted_vec()
            .into_iter()
            .map(|(count, std::cmp::Reverse(gram))| (gram.to_string(), count))
            .collect()
    }

    fn prepare(&self, id: EntryId, name: &str) -> Result<NameProfile> {
        let profile = NameProfile::new(name, self.ngram_len);
        if profile.is_empty() {
            return Err(CatalogueError::EmptyName { id });
        }
        Ok(profile)
    }

    fn commit(&mut self, id: EntryId, profile: NameProfile) {
        debug_assert!(!self.rows.contains_key(&id), "commit of duplicate id {}", id);
        self.aggregate.absorb(&profile.grams);
        self.rows.insert(id, profile);
    }
}
