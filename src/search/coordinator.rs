// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One query, start to finish.
//!
//! ```text
//! query ─▶ normalize ─▶ n-grams ─┐
//!                                ▼
//! cached rows ──────────▶ composite (+ relevance) ─▶ threshold ─▶ TopK ─▶ ranked
//! ```
//!
//! One pass over the corpus, O(N · cost(score) + N log K). The index is only
//! read; each row's n-grams were counted at insert time.

use super::top_k::TopK;
use crate::contracts::check_results_ranked;
use crate::index::CorpusIndex;
use crate::scoring::{composite_profiles, MAX_SCORE};
use crate::scoring::weighting::{boosted_score, relevance};
use crate::types::{ScoredId, SearchOptions};

/// Score every indexed entry against `query` and keep the best.
///
/// Returns at most `options.max_results` hits, best first (score descending,
/// id ascending), each with `score >= options.threshold`. A zero limit, an
/// empty index, or a query with nothing matchable after normalization gives
/// an empty list. A NaN threshold keeps nothing.
pub fn rank(index: &CorpusIndex, query: &str, options: &SearchOptions) -> Vec<ScoredId> {
    if options.max_results == 0 || index.is_empty() {
        return Vec::new();
    }

    let query = index.profile_query(query);
    if query.is_empty() {
        return Vec::new();
    }

    let corpus = index.aggregate();
    let mut top = TopK::new(options.max_results);

    for (id, row) in index.rows() {
        let mut score = composite_profiles(&query, row);
        // An exact match stays at MAX_SCORE even when the entry is too short
        // to carry any n-gram relevance.
        if options.weighted && score < MAX_SCORE {
            let rel = relevance(&query.grams, &row.grams, corpus.counts(), corpus.total());
            score = boosted_score(score, rel);
        }
        if score >= options.threshold {
            top.push(ScoredId { id, score });
        }
    }

    let ranked = top.into_sorted_vec();
    check_results_ranked(&ranked);
    ranked
}
