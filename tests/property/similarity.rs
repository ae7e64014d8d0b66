// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram, cosine, Levenshtein and composite properties.

use catfind::{
    composite_similarity, cosine_similarity, levenshtein_distance, ngram_frequency, ngrams,
    normalize,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet, so that n-grams actually collide.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcde]{0,12}").unwrap()
}

/// Course-like names with case, punctuation, and accents.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Chinese", "LANGUAGE", "literature", "Calculus", "I", "II", "Économie", "naïve",
            "Intro-to", "café", "(Honors)", "organic", "chemistry",
        ]),
        0..4,
    )
    .prop_map(|words| words.join(" "))
}

// ============================================================================
// NGRAMS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Window count is max(0, chars - L + 1).
    #[test]
    fn prop_ngram_count(s in "\\PC{0,16}", len in 0usize..6) {
        let chars = s.chars().count();
        let expected = if len == 0 { 0 } else { (chars + 1).saturating_sub(len) };
        prop_assert_eq!(ngrams(&s, len).len(), expected);
    }

    /// Frequency counts sum to the number of windows.
    #[test]
    fn prop_frequency_total_matches_windows(s in word_strategy(), len in 1usize..5) {
        let total: usize = ngram_frequency(&s, len).values().sum();
        prop_assert_eq!(total, ngrams(&s, len).len());
    }

    /// Every n-gram is exactly `len` characters.
    #[test]
    fn prop_ngrams_have_fixed_width(s in "\\PC{0,16}", len in 1usize..6) {
        for gram in ngrams(&s, len) {
            prop_assert_eq!(gram.chars().count(), len);
        }
    }
}

// ============================================================================
// COSINE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_cosine_self_is_one(s in "[a-z]{3,16}") {
        prop_assert_eq!(cosine_similarity(&s, &s), 1.0);
    }

    #[test]
    fn prop_cosine_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn prop_cosine_in_unit_range(a in word_strategy(), b in word_strategy()) {
        let cos = cosine_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&cos));
    }
}

// ============================================================================
// LEVENSHTEIN
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential: matches strsim's reference implementation.
    #[test]
    fn diff_levenshtein_vs_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_levenshtein_identity(s in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein_distance(&s, &s), 0);
    }

    #[test]
    fn prop_levenshtein_zero_only_when_equal(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_levenshtein_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn prop_levenshtein_triangle(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        let ac = levenshtein_distance(&a, &c);
        let ab = levenshtein_distance(&a, &b);
        let bc = levenshtein_distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)={} + d(b,c)={}", ac, ab, bc);
    }
}

// ============================================================================
// COMPOSITE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_composite_symmetric(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(composite_similarity(&a, &b), composite_similarity(&b, &a));
    }

    #[test]
    fn prop_composite_self_is_max(s in name_strategy()) {
        prop_assert_eq!(composite_similarity(&s, &s), 1.0);
    }

    #[test]
    fn prop_composite_in_unit_range(a in name_strategy(), b in name_strategy()) {
        let score = composite_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Nothing scores higher than an exact match.
    #[test]
    fn prop_composite_self_dominates(a in name_strategy(), b in name_strategy()) {
        prop_assert!(composite_similarity(&a, &b) <= composite_similarity(&a, &a));
    }

    /// Normalization is idempotent, so scoring is case and punctuation blind.
    #[test]
    fn prop_normalize_idempotent(s in "[A-Za-z0-9ÀÉÈÎÕÜçñ .,'()-]{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }
}

// ============================================================================
// MONOTONICITY
// ============================================================================

/// With the n-gram overlap held fixed (none at all), a larger edit distance
/// never scores higher.
#[test]
fn composite_non_increasing_in_edit_distance() {
    // Short strings: no trigrams on any side, so only the edit term varies
    let closer = composite_similarity("ab", "ax");
    let farther = composite_similarity("ab", "xy");
    assert!(closer >= farther);

    // Disjoint trigram sets of equal length: cosine is 0 on both
    let closer = composite_similarity("abcdef", "abxdxf");
    let farther = composite_similarity("abcdef", "xbxdxf");
    assert_eq!(cosine_similarity("abcdef", "abxdxf"), 0.0);
    assert_eq!(cosine_similarity("abcdef", "xbxdxf"), 0.0);
    assert!(closer > farther);
}
