// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing and frequency arithmetic.
//!
//! Text normalization so names compare on content rather than casing or
//! punctuation, and the generic map helpers the similarity and corpus code
//! is assembled from.

pub mod freq;
pub mod normalize;
