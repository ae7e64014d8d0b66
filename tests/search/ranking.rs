// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering of results.

use super::common::{assert_ranked, catalogue_of, course_catalogue, hit_ids};
use catfind::{Catalogue, Event, SearchOptions};

#[test]
fn chinese_entries_rank_above_calculus() {
    let catalogue = catalogue_of(&[(1, "Chinese Language"), (2, "Chinese Literature"), (3, "Calculus I")]);
    let hits = catalogue.search("chinese", 10, 0.0);
    assert_eq!(hit_ids(&hits), vec![1, 2, 3]);
    assert!(hits[1].score > hits[2].score);
}

#[test]
fn typo_still_finds_intended_entry() {
    let catalogue = course_catalogue();
    let hits = catalogue.search("calculsu ii", 1, 0.0);
    assert_eq!(hits[0].entry.name, "Calculus II");
}

#[test]
fn punctuation_and_case_are_ignored() {
    let catalogue = course_catalogue();
    let hits = catalogue.search("ORGANIC-chemistry!!", 1, 0.0);
    assert_eq!(hits[0].entry.id, 6);
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn equal_scores_break_ties_by_ascending_id() {
    let mut catalogue = Catalogue::new();
    // Same normalized name, inserted out of id order
    catalogue.add_entry(30, "Drama", Event::Null).unwrap();
    catalogue.add_entry(10, "drama", Event::Null).unwrap();
    catalogue.add_entry(20, "DRAMA!", Event::Null).unwrap();

    let hits = catalogue.search("drama", 10, 0.0);
    assert_eq!(hit_ids(&hits), vec![10, 20, 30]);
    assert!(hits.iter().all(|h| h.score == 1.0));
}

#[test]
fn limit_keeps_lowest_ids_among_ties() {
    let mut catalogue = Catalogue::new();
    for id in [5, 3, 9, 1, 7] {
        catalogue.add_entry(id, "Seminar", Event::Null).unwrap();
    }
    let hits = catalogue.search("seminar", 2, 0.0);
    assert_eq!(hit_ids(&hits), vec![1, 3]);
}

#[test]
fn results_are_ranked_for_many_queries() {
    let catalogue = course_catalogue();
    for query in ["chem", "intro", "calculus", "language", "lit", "zzz"] {
        let hits = catalogue.search(query, 10, 0.0);
        assert_ranked(&hits);
    }
}

#[test]
fn weighted_search_favours_distinctive_overlap() {
    // Both courses share exactly "abc" with the query and tie on the plain
    // composite. The filler names make every other n-gram of course 2 common,
    // so its shared n-gram carries more of its TF-IDF mass.
    let mut names = vec![(1, "abc xyz"), (2, "xyz abc")];
    names.extend((10..15).map(|id| (id, "xyz ab")));
    let catalogue = catalogue_of(&names);

    let position = |hits: &[catfind::ScoredResult<'_>], id| {
        hits.iter().position(|h| h.entry.id == id).unwrap()
    };
    let score_of = |hits: &[catfind::ScoredResult<'_>], id| hits[position(hits, id)].score;

    let plain = catalogue.search_with("abc", &SearchOptions::new(10, 0.0));
    assert_eq!(score_of(&plain, 1), score_of(&plain, 2));
    assert!(position(&plain, 1) < position(&plain, 2));

    let weighted = catalogue.search_with("abc", &SearchOptions::new(10, 0.0).weighted(true));
    assert!(score_of(&weighted, 2) > score_of(&weighted, 1));
    assert!(position(&weighted, 2) < position(&weighted, 1));
    // The boost is rescaled into [0, 1], so it never lifts a score
    assert!(score_of(&weighted, 2) <= score_of(&plain, 2));
    assert_ranked(&weighted);
}

#[test]
fn weighted_exact_match_still_scores_one() {
    let catalogue = course_catalogue();
    let hits = catalogue.search_with("Calculus I", &SearchOptions::new(1, 0.0).weighted(true));
    assert_eq!(hits[0].entry.id, 3);
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn weighted_exact_match_on_name_without_ngrams() {
    let catalogue = catalogue_of(&[(1, "PE"), (2, "Art History")]);

    let hits = catalogue.search_with("pe", &SearchOptions::new(10, 0.0).weighted(true));
    assert_eq!(hits[0].entry.id, 1);
    assert_eq!(hits[0].score, 1.0);

    let exact_only = catalogue.search_with("pe", &SearchOptions::new(10, 1.0).weighted(true));
    assert_eq!(hit_ids(&exact_only), vec![1]);
}
