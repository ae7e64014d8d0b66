// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy name search over a catalogue of entries.
//!
//! Every entry name is normalized and cut into overlapping character n-grams
//! once, at insertion. A query is scored against each cached entry with a
//! composite of n-gram cosine similarity and normalized Levenshtein
//! similarity; a bounded min-heap keeps the best `k`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  util        │────▶│  fuzzy       │────▶│  scoring     │
//! │ (normalize,  │     │ (ngrams,     │     │ (composite,  │
//! │  freq maps)  │     │  cosine, lev)│     │  tf-idf)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │  index       │────▶│  search      │
//!                      │ (CorpusIndex,│     │ (rank, TopK) │
//!                      │  aggregate)  │     │              │
//!                      └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                     catalogue                           │
//! │  (Catalogue: entries + index, load, search;             │
//! │   SharedCatalogue: RwLock for concurrent readers)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use catfind::{Catalogue, Event};
//!
//! let mut catalogue = Catalogue::new();
//! catalogue.add_entry(1, "Chinese Language", Event::Null).unwrap();
//! catalogue.add_entry(2, "Calculus I", Event::Null).unwrap();
//!
//! let hits = catalogue.search("chinse", 5, 0.2);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].entry.name, "Chinese Language");
//! ```

pub mod build;
pub mod catalogue;
pub mod contracts;
mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

pub use catalogue::Catalogue;
#[cfg(feature = "parallel")]
pub use catalogue::SharedCatalogue;
pub use error::{CatalogueError, Result};
pub use fuzzy::{
    cosine_similarity, cosine_similarity_maps, levenshtein_distance, ngram_frequency, ngrams,
    DEFAULT_NGRAM_LEN,
};
pub use index::{CorpusAggregate, CorpusIndex};
pub use scoring::{composite_similarity, NameProfile, COSINE_WEIGHT, EDIT_WEIGHT, MAX_SCORE};
pub use search::{rank, TopK};
pub use types::{
    Entry, EntryId, Event, NgramFreq, OwnedResult, ScoredId, ScoredResult, SearchOptions,
    DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD,
};
pub use util::normalize::normalize;
