// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF relevance over the corpus n-gram caches.
//!
//! A shared trigram like "ing" or "tro" says little in a course list where
//! half the names contain it; a shared "qua" says a lot. The weight of an
//! n-gram is its frequency inside one entry scaled by how rare it is across
//! the whole corpus aggregate.
//!
//! ```text
//! tf   = count_in_entry / grams_in_entry
//! idf  = ln(1 + grams_in_corpus / count_in_corpus)
//! w    = tf · idf          (0 when any count is 0)
//! ```

use crate::types::NgramFreq;

/// How much a fully relevant match can lift the composite, before rescaling
/// back into [0, 1].
pub const RELEVANCE_BOOST: f64 = 0.5;

/// The raw TF-IDF formula over counts and totals.
///
/// Degrades to 0 instead of dividing by zero when the term is absent from
/// either side.
pub fn tf_idf(entry_count: usize, entry_total: usize, corpus_count: usize, corpus_total: usize) -> f64 {
    if entry_count == 0 || entry_total == 0 || corpus_count == 0 {
        return 0.0;
    }
    let tf = entry_count as f64 / entry_total as f64;
    let idf = (1.0 + corpus_total as f64 / corpus_count as f64).ln();
    tf * idf
}

/// Weight of `term` in one entry's n-gram map relative to the corpus
/// aggregate.
///
/// `entry_total` and `corpus_total` are the summed counts of the two maps;
/// the index already tracks both, so a lookup stays O(1).
pub fn term_weight(
    term: &str,
    entry: &NgramFreq,
    entry_total: usize,
    corpus: &NgramFreq,
    corpus_total: usize,
) -> f64 {
    let entry_count = entry.get(term).copied().unwrap_or(0);
    let corpus_count = corpus.get(term).copied().unwrap_or(0);
    tf_idf(entry_count, entry_total, corpus_count, corpus_total)
}

/// Fraction of an entry's TF-IDF mass carried by n-grams the query also has.
///
/// In [0, 1]; 1 when every n-gram of the entry appears in the query.
pub fn relevance(query: &NgramFreq, entry: &NgramFreq, corpus: &NgramFreq, corpus_total: usize) -> f64 {
    let entry_total: usize = entry.values().sum();
    let mut total = 0.0;
    let mut shared = 0.0;
    for gram in entry.keys() {
        let weight = term_weight(gram, entry, entry_total, corpus, corpus_total);
        total += weight;
        if query.contains_key(gram) {
            shared += weight;
        }
    }
    if total == 0.0 {
        return 0.0;
    }
    (shared / total).clamp(0.0, 1.0)
}

/// Lift `composite` by `relevance`, staying within [0, 1].
///
/// A perfect composite with full relevance stays exactly 1. Relevance is 0
/// for an entry with no n-grams, so callers keep exact matches out of here.
pub fn boosted_score(composite: f64, relevance: f64) -> f64 {
    composite * (1.0 + RELEVANCE_BOOST * relevance) / (1.0 + RELEVANCE_BOOST)
}
