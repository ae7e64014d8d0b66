// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composite similarity score.
//!
//! Trigram cosine rewards shared substrings and shrugs off word order, but it
//! has nothing to say about two short names a typo apart ("calc" vs "calk"
//! share one trigram out of two). Normalized edit distance covers that case.
//! The composite is a fixed weighted sum of the two, in [0, 1].
//!
//! # Properties
//!
//! ```text
//! composite(s, s)    = 1                     (maximum, for every s)
//! composite(a, b)    = composite(b, a)       (exactly, not approximately)
//! lev(a, b) grows    ⇒ composite does not grow, cosine held fixed
//! ```
//!
//! # Constants
//!
//! | Weight        | Value | Role |
//! |---------------|-------|------|
//! | COSINE_WEIGHT | 0.75  | Substring overlap dominates the ranking |
//! | EDIT_WEIGHT   | 0.25  | Closeness of near-identical spellings |
//!
//! Both are exact binary fractions, so the weighted sum of two perfect
//! components is exactly 1.0. Their sum is checked at compile time in
//! `contracts.rs`.

use crate::fuzzy::{cosine_similarity_maps, levenshtein_distance, ngram_frequency, DEFAULT_NGRAM_LEN};
use crate::types::NgramFreq;
use crate::util::normalize::normalize;

/// Weight of the n-gram cosine component.
pub const COSINE_WEIGHT: f64 = 0.75;

/// Weight of the normalized edit-distance component.
pub const EDIT_WEIGHT: f64 = 0.25;

/// Highest score any comparison can produce.
pub const MAX_SCORE: f64 = 1.0;

/// A name prepared for comparison: normalized once, n-grams counted once.
///
/// The corpus caches one of these per entry, and a query builds one per
/// search, so no string is re-normalized inside the scoring loop.
#[derive(Debug, Clone, PartialEq)]
pub struct NameProfile {
    pub normalized: String,
    /// Length of `normalized` in characters.
    pub char_len: usize,
    pub grams: NgramFreq,
}

impl NameProfile {
    pub fn new(raw: &str, ngram_len: usize) -> Self {
        let normalized = normalize(raw);
        let char_len = normalized.chars().count();
        let grams = ngram_frequency(&normalized, ngram_len);
        Self {
            normalized,
            char_len,
            grams,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// `1 - lev / longest`, in [0, 1]. Two empty strings are identical.
pub fn edit_similarity(a: &NameProfile, b: &NameProfile) -> f64 {
    let longest = a.char_len.max(b.char_len);
    if longest == 0 {
        return MAX_SCORE;
    }
    let distance = levenshtein_distance(&a.normalized, &b.normalized);
    1.0 - distance as f64 / longest as f64
}

/// Composite similarity of two prepared names.
///
/// When neither name is long enough to have an n-gram, the cosine term is
/// meaningless and the edit component alone decides. When only one side has
/// n-grams the cosine is 0 and the edit term keeps its usual weight, so a
/// short query can score lower against a name containing it ("ab" vs "abc")
/// than against a same-length neighbour ("ab" vs "ac").
pub fn composite_profiles(a: &NameProfile, b: &NameProfile) -> f64 {
    if a.normalized == b.normalized {
        return MAX_SCORE;
    }
    let edit = edit_similarity(a, b);
    if a.grams.is_empty() && b.grams.is_empty() {
        return edit;
    }
    let cosine = cosine_similarity_maps(&a.grams, &b.grams);
    (COSINE_WEIGHT * cosine + EDIT_WEIGHT * edit).clamp(0.0, MAX_SCORE)
}

/// Composite similarity of two raw strings, trigram windows.
///
/// ```
/// use catfind::composite_similarity;
///
/// assert_eq!(composite_similarity("Calculus I", "calculus-i"), 1.0);
/// assert!(composite_similarity("chinese", "Chinese Language") > composite_similarity("chinese", "Calculus I"));
/// ```
pub fn composite_similarity(s1: &str, s2: &str) -> f64 {
    composite_profiles(
        &NameProfile::new(s1, DEFAULT_NGRAM_LEN),
        &NameProfile::new(s2, DEFAULT_NGRAM_LEN),
    )
}
