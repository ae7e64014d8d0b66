// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name canonicalization ahead of comparison.
//!
//! Both the n-gram and the edit-distance metrics compare characters, so
//! anything that differs only in case, accents or punctuation has to be
//! folded away first. Otherwise "Calculus-I" and "calculus i" would look
//! three edits apart.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Separator every run of non-alphanumeric characters collapses to.
pub const SEPARATOR: char = ' ';

/// Normalize a name for matching: lowercase, strip diacritics, and collapse
/// punctuation and whitespace runs into a single space.
///
/// - "Chinese Language" → "chinese language"
/// - "Calculus-I" → "calculus i"
/// - "  Café,  Culture!" → "cafe culture"
///
/// Total and pure. Empty (or all-punctuation) input gives an empty string.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Split on anything that is not alphanumeric, rejoin with one separator
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
    collapse_separators(&folded)
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Lowercases and collapses separators; accents are kept as-is.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_separators(&value.to_lowercase())
}

fn collapse_separators(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for word in value.split(|c: char| !c.is_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(word);
    }
    out
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
