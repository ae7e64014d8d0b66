// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frequency-map arithmetic.
//!
//! Small generic helpers over `HashMap<K, V>` where `V` accumulates. Nothing
//! here knows about n-grams; the corpus caches and the cosine metric are built
//! on top of these.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::ops::AddAssign;

/// Count how often each item appears.
///
/// ```
/// use catfind::util::freq::make_freq;
///
/// let freq = make_freq(["a", "b", "a"]);
/// assert_eq!(freq["a"], 2);
/// assert_eq!(freq["b"], 1);
/// ```
pub fn make_freq<I>(items: I) -> HashMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut map = HashMap::new();
    for item in items {
        *map.entry(item).or_insert(0) += 1;
    }
    map
}

/// Add every value of `src` into `dest`, key by key.
pub fn sum_maps<K, V>(dest: &mut HashMap<K, V>, src: &HashMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: AddAssign + Copy + Default,
{
    for (key, value) in src {
        *dest.entry(key.clone()).or_default() += *value;
    }
}

/// Add one to `dest` for every key present in `src`, ignoring its count.
///
/// Applied once per source map this accumulates document frequency: how many
/// maps contain each key.
pub fn combine_occ_maps<K, V>(dest: &mut HashMap<K, usize>, src: &HashMap<K, V>)
where
    K: Eq + Hash + Clone,
{
    for key in src.keys() {
        *dest.entry(key.clone()).or_insert(0) += 1;
    }
}

/// Union of the keys of two maps.
pub fn union_keys<'a, K, V>(a: &'a HashMap<K, V>, b: &'a HashMap<K, V>) -> HashSet<&'a K>
where
    K: Eq + Hash,
{
    a.keys().chain(b.keys()).collect()
}

/// Sum of squared counts. Kept integral so that callers can take one
/// square root at the end.
pub fn squared_magnitude<K>(map: &HashMap<K, usize>) -> u64 {
    map.values().map(|&v| (v as u64) * (v as u64)).sum()
}

/// Euclidean length of the map viewed as a sparse vector.
pub fn map_magnitude<K>(map: &HashMap<K, usize>) -> f64 {
    (squared_magnitude(map) as f64).sqrt()
}

/// Dot product of two count maps over their shared keys.
///
/// Iterates the smaller map. Integer arithmetic keeps the result
/// independent of argument order.
pub fn dot_product<K>(a: &HashMap<K, usize>, b: &HashMap<K, usize>) -> u64
where
    K: Eq + Hash,
{
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(key, &x)| large.get(key).map(|&y| (x as u64) * (y as u64)))
        .sum()
}
