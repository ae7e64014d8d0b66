// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The threshold is an inclusive similarity floor: kept iff `score >= threshold`.

use super::common::{catalogue_of, course_catalogue, hit_ids};
use catfind::{CatalogueError, SearchOptions};

#[test]
fn score_equal_to_threshold_is_kept() {
    let catalogue = course_catalogue();
    let all = catalogue.search("chinese", 10, 0.0);
    let boundary = all[1].score;

    let hits = catalogue.search("chinese", 10, boundary);
    assert!(hits.iter().any(|h| h.entry.id == all[1].entry.id));
    assert!(hits.iter().all(|h| h.score >= boundary));
}

#[test]
fn score_just_below_threshold_is_dropped() {
    let catalogue = course_catalogue();
    let all = catalogue.search("chinese", 10, 0.0);
    let boundary = all[1].score;
    let above = f64::from_bits(boundary.to_bits() + 1);

    let hits = catalogue.search("chinese", 10, above);
    assert!(!hits.iter().any(|h| h.entry.id == all[1].entry.id));
    assert_eq!(hit_ids(&hits), vec![all[0].entry.id]);
}

#[test]
fn exact_match_survives_threshold_one() {
    let catalogue = catalogue_of(&[(1, "Calculus I"), (2, "Calculus II")]);
    let hits = catalogue.search("calculus i", 10, 1.0);
    assert_eq!(hit_ids(&hits), vec![1]);
}

#[test]
fn threshold_above_one_keeps_nothing() {
    let catalogue = course_catalogue();
    assert!(catalogue.search("Calculus I", 10, 1.01).is_empty());
}

#[test]
fn zero_and_negative_thresholds_keep_everything() {
    let catalogue = course_catalogue();
    assert_eq!(catalogue.search("zzz", 100, 0.0).len(), catalogue.size());
    assert_eq!(catalogue.search("zzz", 100, -5.0).len(), catalogue.size());
}

#[test]
fn nan_threshold_is_rejected_and_keeps_nothing() {
    let options = SearchOptions::new(10, f64::NAN);
    assert!(matches!(options.validate(), Err(CatalogueError::InvalidThreshold(_))));

    let catalogue = course_catalogue();
    assert!(catalogue.search_with("chinese", &options).is_empty());
}
