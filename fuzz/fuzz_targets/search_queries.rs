// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at a fixed course catalogue. Search must never
//! panic, must respect the limit and the threshold, and must return results
//! best first with ties by ascending id.

#![no_main]

use arbitrary::Arbitrary;
use catfind::testing::course_catalogue;
use catfind::{Catalogue, SearchOptions};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    limit: u8,
    threshold: u8,
    weighted: bool,
}

fuzz_target!(|input: QueryInput| {
    static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
    let catalogue = CATALOGUE.get_or_init(course_catalogue);

    let limit = usize::from(input.limit % 16);
    let threshold = f64::from(input.threshold) / 200.0;
    let options = SearchOptions::new(limit, threshold).weighted(input.weighted);

    let hits = catalogue.search_with(&input.query, &options);

    // INVARIANT 1: bounded by the limit
    assert!(hits.len() <= limit);

    // INVARIANT 2: every score in [threshold, 1]
    for hit in &hits {
        assert!(hit.score >= threshold && hit.score <= 1.0, "score {}", hit.score);
        assert!(catalogue.has(hit.entry.id));
    }

    // INVARIANT 3: best first, ascending id on ties
    for pair in hits.windows(2) {
        let (x, y) = (&pair[0], &pair[1]);
        assert!(x.score > y.score || (x.score == y.score && x.entry.id < y.entry.id));
    }
});
