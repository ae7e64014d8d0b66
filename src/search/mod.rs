// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! A query is scored against every cached row and the survivors stream into
//! a bounded top-K selector, so ranking costs O(N log K) rather than a full
//! sort of the catalogue.

mod coordinator;
pub mod top_k;

pub use coordinator::*;
pub use top_k::TopK;
