// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String similarity primitives: n-grams, cosine overlap, edit distance.
//!
//! The n-gram cosine catches shared substrings even when words are reordered
//! or padded; edit distance catches short near-identical names that share
//! too few trigrams to register. `scoring` blends the two.

mod cosine;
mod levenshtein;
mod ngram;

pub use cosine::*;
pub use levenshtein::*;
pub use ngram::*;
