// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::NgramFreq;
use crate::util::freq::{combine_occ_maps, sum_maps};

/// Corpus-wide n-gram statistics.
///
/// `counts` is the element-wise sum of every indexed entry's n-gram map;
/// `doc_freq` counts how many entries contain each n-gram. Only
/// [`CorpusIndex`](super::CorpusIndex) mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusAggregate {
    counts: NgramFreq,
    doc_freq: NgramFreq,
    total: usize,
}

impl CorpusAggregate {
    pub(crate) fn absorb(&mut self, grams: &NgramFreq) {
        sum_maps(&mut self.counts, grams);
        combine_occ_maps(&mut self.doc_freq, grams);
        self.total += grams.values().sum::<usize>();
    }

    /// Summed occurrences of every n-gram.
    pub fn counts(&self) -> &NgramFreq {
        &self.counts
    }

    /// Number of entries containing each n-gram.
    pub fn doc_freq(&self) -> &NgramFreq {
        &self.doc_freq
    }

    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn document_frequency(&self, gram: &str) -> usize {
        self.doc_freq.get(gram).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct n-grams seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}
