// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded top-K selection.
//!
//! The heap must keep exactly what a full sort would keep, whatever the
//! stream and capacity.

#![no_main]

use arbitrary::Arbitrary;
use catfind::TopK;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SelectInput {
    stream: Vec<i16>,
    capacity: u8,
}

fuzz_target!(|input: SelectInput| {
    let k = usize::from(input.capacity);
    let mut top = TopK::new(k);
    for &value in &input.stream {
        top.push(value);
        assert!(top.len() <= k);
    }

    // INVARIANT 1: size is min(N, K)
    assert_eq!(top.len(), input.stream.len().min(k));

    // INVARIANT 2: contents equal the K largest of a full sort
    let mut expected = input.stream.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.truncate(k);
    assert_eq!(top.into_sorted_vec(), expected);
});
