// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use crate::catalogue::Catalogue;
use crate::types::{Entry, EntryId, Event};
use serde_json::json;

/// Course names used by the fixtures, keyed by id.
pub const COURSES: &[(EntryId, &str)] = &[
    (1, "Chinese Language"),
    (2, "Chinese Literature"),
    (3, "Calculus I"),
    (4, "Calculus II"),
    (5, "Introduction to Linguistics"),
    (6, "Organic Chemistry"),
];

/// An entry with a small JSON payload naming its department.
pub fn make_entry(id: EntryId, name: &str) -> Entry {
    Entry::new(id, name, json!({ "dept": department(name) }))
}

/// An entry with no payload.
pub fn make_entry_simple(id: EntryId, name: &str) -> Entry {
    Entry::new(id, name, Event::Null)
}

/// Catalogue over [`COURSES`].
pub fn course_catalogue() -> Catalogue {
    catalogue_of(COURSES)
}

/// Catalogue over arbitrary `(id, name)` pairs.
///
/// # Panics
/// Panics on a duplicate id or an unmatchable name.
pub fn catalogue_of(names: &[(EntryId, &str)]) -> Catalogue {
    let mut catalogue = Catalogue::new();
    let entries = names.iter().map(|&(id, name)| make_entry(id, name)).collect();
    catalogue
        .extend_entries(entries)
        .expect("fixture names must be unique and matchable");
    catalogue
}

/// `count` synthetic course names: "Course N Topic", cycling through topics.
pub fn synthetic_names(count: usize) -> Vec<(EntryId, String)> {
    const TOPICS: &[&str] = &[
        "Algebra",
        "Biology",
        "Chemistry",
        "Drama",
        "Economics",
        "French",
        "Geometry",
        "History",
    ];
    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            (i as EntryId, format!("{} {} Seminar {}", topic, i / TOPICS.len(), i))
        })
        .collect()
}

fn department(name: &str) -> &'static str {
    match name.split_whitespace().next() {
        Some("Chinese") | Some("Introduction") => "languages",
        Some("Calculus") => "mathematics",
        Some("Organic") => "chemistry",
        _ => "general",
    }
}
