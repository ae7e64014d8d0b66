// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Degenerate queries and catalogues.

use super::common::{course_catalogue, hit_ids};
use catfind::{Catalogue, Event};

#[test]
fn zero_limit_returns_nothing() {
    let catalogue = course_catalogue();
    assert!(catalogue.search("chinese", 0, 0.0).is_empty());
    assert!(catalogue.search("", 0, 0.0).is_empty());
}

#[test]
fn empty_catalogue_returns_nothing() {
    let catalogue: Catalogue = Catalogue::new();
    assert!(catalogue.search("chinese", 10, 0.0).is_empty());
}

#[test]
fn empty_and_punctuation_queries_return_nothing() {
    let catalogue = course_catalogue();
    for query in ["", "   ", "!!!", "-- / --"] {
        assert!(catalogue.search(query, 10, 0.0).is_empty(), "query {:?}", query);
    }
}

#[test]
fn query_shorter_than_ngram_still_scores() {
    let catalogue = course_catalogue();
    let hits = catalogue.search("ch", 10, 0.0);
    assert_eq!(hits.len(), catalogue.size());
    assert!(hits.iter().all(|h| (0.0..=1.0).contains(&h.score)));
}

#[test]
fn short_names_compare_by_edit_distance() {
    let mut catalogue = Catalogue::new();
    catalogue.add_entry(1, "PE", Event::Null).unwrap();
    catalogue.add_entry(2, "Art", Event::Null).unwrap();

    let hits = catalogue.search("pe", 10, 0.0);
    assert_eq!(hits[0].entry.id, 1);
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn limit_larger_than_catalogue_returns_all() {
    let catalogue = course_catalogue();
    let hits = catalogue.search("course", usize::MAX, 0.0);
    assert_eq!(hits.len(), catalogue.size());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn unicode_names_match_without_accents() {
    let mut catalogue = Catalogue::new();
    catalogue.add_entry(1, "Histoire de l'Économie", Event::Null).unwrap();
    catalogue.add_entry(2, "Mathématiques", Event::Null).unwrap();

    let hits = catalogue.search("mathematiques", 1, 0.0);
    assert_eq!(hit_ids(&hits), vec![2]);
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn searching_does_not_change_the_catalogue() {
    let catalogue = course_catalogue();
    let before = catalogue.index().aggregate().clone();
    let _ = catalogue.search("chinese", 3, 0.0);
    let _ = catalogue.search("", 3, 0.5);
    assert_eq!(catalogue.index().aggregate(), &before);
    assert_eq!(catalogue.size(), 6);
}
