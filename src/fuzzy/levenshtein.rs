// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance for the composite score.
//!
//! Two-row DP over characters, sized by the shorter string.

/// Unit-cost insert/delete/substitute distance between two strings.
///
/// Counts characters, not bytes. Zero iff the strings are equal; symmetric;
/// obeys the triangle inequality.
///
/// ```
/// use catfind::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Row over the shorter string keeps the buffer small
    let (outer, inner) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    let mut row: Vec<usize> = (0..=inner.len()).collect();
    for (i, oc) in outer.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, ic) in inner.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(oc != ic);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }
    row[inner.len()]
}
