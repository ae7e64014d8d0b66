// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catfind::{Catalogue, EntryId, ScoredResult};
use std::io::Write;
use tempfile::NamedTempFile;

pub use catfind::testing::{catalogue_of, course_catalogue, make_entry, synthetic_names, COURSES};

/// Ids of `hits`, in result order.
pub fn hit_ids(hits: &[ScoredResult<'_>]) -> Vec<EntryId> {
    hits.iter().map(|hit| hit.entry.id).collect()
}

/// Catalogue of `count` synthetic course names.
pub fn synthetic_catalogue(count: usize) -> Catalogue {
    let names = synthetic_names(count);
    let borrowed: Vec<(EntryId, &str)> = names.iter().map(|(id, n)| (*id, n.as_str())).collect();
    catalogue_of(&borrowed)
}

/// Write `json` to a temporary catalogue file that lives as long as the handle.
pub fn catalogue_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Assert that hits are best-first with ascending ids on equal scores.
pub fn assert_ranked(hits: &[ScoredResult<'_>]) {
    for pair in hits.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.entry.id < b.entry.id),
            "out of order: #{} ({}) before #{} ({})",
            a.entry.id,
            a.score,
            b.entry.id,
            b.score
        );
    }
}
