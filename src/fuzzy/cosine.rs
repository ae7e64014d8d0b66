// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cosine similarity over n-gram count vectors.
//!
//! Each map is a sparse vector indexed by n-gram. The dot product and both
//! squared magnitudes are integer sums, so the only rounding happens in the
//! final division, and `cos(a, b)` is bit-for-bit `cos(b, a)`.

use super::ngram::{ngram_frequency, DEFAULT_NGRAM_LEN};
use crate::types::NgramFreq;
use crate::util::freq::{dot_product, squared_magnitude};

/// Cosine of the angle between two n-gram count vectors, in [0, 1].
///
/// A zero vector has no direction: comparing against one yields 0, not NaN.
pub fn cosine_similarity_maps(a: &NgramFreq, b: &NgramFreq) -> f64 {
    let norm_a = squared_magnitude(a);
    let norm_b = squared_magnitude(b);
    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }
    let dot = dot_product(a, b) as f64;
    let denom = (norm_a as f64 * norm_b as f64).sqrt();
    (dot / denom).clamp(0.0, 1.0)
}

/// Trigram cosine similarity between two strings, taken as given.
///
/// No normalization is applied here; see
/// [`composite_similarity`](crate::composite_similarity) for the
/// case-insensitive score.
///
/// ```
/// use catfind::cosine_similarity;
///
/// assert_eq!(cosine_similarity("chinese", "chinese"), 1.0);
/// assert_eq!(cosine_similarity("ab", "ab"), 0.0); // shorter than a trigram
/// ```
pub fn cosine_similarity(s1: &str, s2: &str) -> f64 {
    cosine_similarity_maps(
        &ngram_frequency(s1, DEFAULT_NGRAM_LEN),
        &ngram_frequency(s2, DEFAULT_NGRAM_LEN),
    )
}
