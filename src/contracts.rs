// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and ranking invariants.
//!
//! Debug-mode assertions only (`debug_assert!`): zero cost in release
//! builds, early failure in tests and development.
//!
//! | Contract                     | Invariant                                     |
//! |------------------------------|-----------------------------------------------|
//! | `check_aggregate_consistent` | aggregate = Σ per-entry n-gram maps            |
//! | `check_score_in_range`       | every score in [0, MAX_SCORE]                  |
//! | `check_results_ranked`       | score descending, id ascending on ties         |

use crate::index::CorpusIndex;
use crate::scoring::ranking::compare_scored;
use crate::scoring::{COSINE_WEIGHT, EDIT_WEIGHT, MAX_SCORE};
use crate::types::{NgramFreq, ScoredId};
use crate::util::freq::{combine_occ_maps, sum_maps};
use std::cmp::Ordering;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The composite weights must sum to exactly one, or a perfect match could
/// score above or below `MAX_SCORE`.
const _: () = {
    assert!(COSINE_WEIGHT + EDIT_WEIGHT == MAX_SCORE);
    assert!(COSINE_WEIGHT > 0.0 && EDIT_WEIGHT > 0.0);
};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that the corpus aggregate equals the sum of the cached rows.
///
/// Recomputes both maps from scratch: O(total n-grams). Meant for tests and
/// debug builds.
///
/// # Panics (debug builds only)
/// Panics if the summed counts, document frequencies, or total disagree.
pub fn check_aggregate_consistent(index: &CorpusIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut counts = NgramFreq::new();
    let mut doc_freq = NgramFreq::new();
    for (_, row) in index.rows() {
        sum_maps(&mut counts, &row.grams);
        combine_occ_maps(&mut doc_freq, &row.grams);
    }
    let total: usize = counts.values().sum();

    let aggregate = index.aggregate();
    debug_assert_eq!(aggregate.counts(), &counts, "aggregate counts drifted from rows");
    debug_assert_eq!(aggregate.doc_freq(), &doc_freq, "document frequencies drifted from rows");
    debug_assert_eq!(aggregate.total(), total, "aggregate total drifted from rows");
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a score is a finite value in [0, MAX_SCORE].
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        (0.0..=MAX_SCORE).contains(&score),
        "score {} outside [0, {}]",
        score,
        MAX_SCORE
    );
}

/// Check that results are best-first and every score is in range.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_results_ranked(results: &[ScoredId]) {
    for result in results {
        check_score_in_range(result.score);
    }
    for window in results.windows(2) {
        debug_assert!(
            compare_scored(&window[0], &window[1]) == Ordering::Greater,
            "results out of order: {:?} before {:?}",
            window[0],
            window[1]
        );
    }
}
