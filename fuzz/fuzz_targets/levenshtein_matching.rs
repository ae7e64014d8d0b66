// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and the composite score.
//!
//! Checks the metric laws on arbitrary Unicode: identity, symmetry, the
//! length bounds, and a composite score that stays in [0, 1] and is
//! symmetric.

#![no_main]

use arbitrary::Arbitrary;
use catfind::{composite_similarity, cosine_similarity, levenshtein_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
}

/// First `n` characters, never splitting one.
fn cap(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fuzz_target!(|input: MatchInput| {
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);

    let d = levenshtein_distance(a, b);

    // INVARIANT 1: identity and symmetry
    assert_eq!(levenshtein_distance(a, a), 0);
    assert_eq!(d, levenshtein_distance(b, a), "asymmetric for {:?} / {:?}", a, b);
    assert_eq!(d == 0, a == b);

    // INVARIANT 2: bounded by the longer string, at least the length gap
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(d <= la.max(lb));
    assert!(d >= la.abs_diff(lb));

    // INVARIANT 3: similarity scores stay in range and are symmetric
    let cos = cosine_similarity(a, b);
    assert!((0.0..=1.0).contains(&cos));
    let score = composite_similarity(a, b);
    assert!((0.0..=1.0).contains(&score), "score {} for {:?} / {:?}", score, a, b);
    assert_eq!(score, composite_similarity(b, a));
    assert_eq!(composite_similarity(a, a), 1.0);
});
