// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the caches that keep per-query work to one sweep.
//!
//! Every entry's name is normalized and cut into n-grams exactly once, at
//! insert time. Queries read those cached rows and the corpus aggregate and
//! never write.

mod aggregate;
mod corpus;

pub use aggregate::*;
pub use corpus::*;
