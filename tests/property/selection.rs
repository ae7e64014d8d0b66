// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded selection and end-to-end ranking properties.

use super::common::{assert_ranked, course_catalogue, synthetic_catalogue};
use catfind::scoring::ranking::sort_ranked;
use catfind::{ScoredId, TopK};
use proptest::prelude::*;

fn scored_strategy() -> impl Strategy<Value = Vec<ScoredId>> {
    // Few distinct scores, so ties are common
    prop::collection::vec((0i64..50, 0u8..8), 0..60).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(id, _)| seen.insert(*id))
            .map(|(id, bucket)| ScoredId {
                id,
                score: f64::from(bucket) / 7.0,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Oracle: the kept set is the first K of a full descending sort.
    #[test]
    fn diff_top_k_vs_full_sort(stream in prop::collection::vec(any::<i32>(), 0..200), k in 0usize..20) {
        let mut top = TopK::new(k);
        for &value in &stream {
            top.push(value);
        }
        prop_assert_eq!(top.len(), stream.len().min(k));

        let mut expected = stream.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(k);
        prop_assert_eq!(top.into_sorted_vec(), expected);
    }

    /// Same for scored ids, where ties on score fall back to id.
    #[test]
    fn diff_top_k_scored_vs_full_sort(stream in scored_strategy(), k in 0usize..12) {
        let mut top = TopK::new(k);
        top.extend(stream.iter().copied());

        let mut expected = stream.clone();
        sort_ranked(&mut expected);
        expected.truncate(k);

        let kept: Vec<i64> = top.into_sorted_vec().iter().map(|s| s.id).collect();
        let wanted: Vec<i64> = expected.iter().map(|s| s.id).collect();
        prop_assert_eq!(kept, wanted);
    }

    /// Insertion order never changes what is kept.
    #[test]
    fn prop_top_k_order_independent(stream in prop::collection::vec(0u16..100, 0..80), k in 1usize..10) {
        let mut forward = TopK::new(k);
        forward.extend(stream.iter().copied());
        let mut backward = TopK::new(k);
        backward.extend(stream.iter().rev().copied());
        prop_assert_eq!(forward.into_sorted_vec(), backward.into_sorted_vec());
    }

    /// The worst kept item is never better than anything kept.
    #[test]
    fn prop_worst_is_minimum(stream in prop::collection::vec(any::<i16>(), 1..100), k in 1usize..10) {
        let mut top = TopK::new(k);
        top.extend(stream);
        let worst = *top.worst().unwrap();
        prop_assert!(top.elements().all(|&v| v >= worst));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_search_sorted(query in "[a-z ]{0,16}", limit in 1usize..10) {
        let catalogue = synthetic_catalogue(64);
        let hits = catalogue.search(&query, limit, 0.0);
        prop_assert!(hits.len() <= limit);
        assert_ranked(&hits);
    }

    #[test]
    fn prop_zero_limit_is_empty(query in "\\PC{0,16}", threshold in -1.0f64..2.0) {
        let catalogue = course_catalogue();
        prop_assert!(catalogue.search(&query, 0, threshold).is_empty());
    }

    /// Search keeps exactly the entries a brute-force scan would.
    #[test]
    fn diff_search_vs_brute_force(query in "[a-z]{1,10}", limit in 1usize..6) {
        let catalogue = synthetic_catalogue(40);
        let mut brute: Vec<ScoredId> = catalogue
            .entries()
            .map(|entry| ScoredId {
                id: entry.id,
                score: catfind::composite_similarity(&query, &entry.name),
            })
            .collect();
        sort_ranked(&mut brute);
        brute.truncate(limit);

        let hits = catalogue.search(&query, limit, 0.0);
        let got: Vec<(i64, f64)> = hits.iter().map(|h| (h.entry.id, h.score)).collect();
        let want: Vec<(i64, f64)> = brute.iter().map(|s| (s.id, s.score)).collect();
        prop_assert_eq!(got, want);
    }
}
