// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character n-grams: the sliding window every similarity score starts from.
//!
//! Windows are taken over `char`s, not bytes, so "café" has two trigrams and
//! no window ever splits a code point.

use crate::types::NgramFreq;
use crate::util::freq::make_freq;

/// Window width used unless a corpus is configured otherwise.
pub const DEFAULT_NGRAM_LEN: usize = 3;

/// Every contiguous substring of exactly `len` characters, sliding by one.
///
/// Produces `max(0, chars(s) - len + 1)` items. A string shorter than the
/// window (and `len == 0`) produces nothing.
///
/// ```
/// use catfind::ngrams;
///
/// assert_eq!(ngrams("hello", 3), vec!["hel", "ell", "llo"]);
/// assert!(ngrams("hi", 3).is_empty());
/// ```
pub fn ngrams(s: &str, len: usize) -> Vec<String> {
    if len == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < len {
        return Vec::new();
    }
    chars
        .windows(len)
        .map(|window| window.iter().collect())
        .collect()
}

/// Tally of [`ngrams`]: how often each window occurs in `s`.
///
/// The counts sum to `max(0, chars(s) - len + 1)`.
pub fn ngram_frequency(s: &str, len: usize) -> NgramFreq {
    make_freq(ngrams(s, len))
}
