// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored entries are ordered.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Entry id** - lower wins, so equal scores always come out the same way
//!
//! `ScoredId` implements `Ord` with this order, "greater" meaning "ranks
//! higher". The top-K selector keeps the greatest items and evicts the least,
//! so the shortlist and the final sort can never disagree about who is worst.

use crate::types::ScoredId;
use std::cmp::Ordering;

/// Compare two scored ids for ranking. `Greater` means `a` ranks above `b`.
///
/// Scores compare with `total_cmp`, which never panics and puts NaN above
/// everything; scoring never produces NaN, so this only matters as a
/// guarantee of totality.
pub fn compare_scored(a: &ScoredId, b: &ScoredId) -> Ordering {
    match a.score.total_cmp(&b.score) {
        // Lower id ranks higher
        Ordering::Equal => b.id.cmp(&a.id),
        ord => ord,
    }
}

/// Sort best-first: score descending, then id ascending.
pub fn sort_ranked(results: &mut [ScoredId]) {
    results.sort_unstable_by(|a, b| compare_scored(b, a));
}

impl PartialEq for ScoredId {
    fn eq(&self, other: &Self) -> bool {
        compare_scored(self, other) == Ordering::Equal
    }
}

impl Eq for ScoredId {}

impl PartialOrd for ScoredId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredId {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scored(self, other)
    }
}
