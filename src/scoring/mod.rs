// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The composite blends n-gram cosine with normalized edit distance. TF-IDF
//! weighting can lift entries whose matching n-grams are rare in the corpus.
//! Ranking turns scores into a total order with a fixed tiebreak.

mod core;
pub mod ranking;
pub mod weighting;

pub use self::core::*;
