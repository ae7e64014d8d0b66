// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::Entry;
use serde::Deserialize;

/// On-disk catalogue layout.
///
/// Either a bare array of entries or an object wrapping one:
///
/// ```json
/// [{ "id": 1, "name": "Chinese Language", "event": { "term": "FA21" } }]
/// { "entries": [{ "id": 1, "name": "Chinese Language" }] }
/// ```
#[derive(Deserialize, Debug)]
#[serde(untagged, bound(deserialize = "E: Deserialize<'de> + Default"))]
pub enum CatalogueDocument<E> {
    List(Vec<Entry<E>>),
    Wrapped { entries: Vec<Entry<E>> },
}

impl<E> CatalogueDocument<E> {
    pub fn into_entries(self) -> Vec<Entry<E>> {
        match self {
            CatalogueDocument::List(entries) | CatalogueDocument::Wrapped { entries } => entries,
        }
    }
}
