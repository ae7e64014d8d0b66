// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A catalogue shared between threads.
//!
//! Reader–writer discipline: any number of searches run in parallel under
//! the read lock; an add or load takes the write lock and so excludes both
//! other writers and in-flight searches. Loads read and parse the file
//! before locking, so the write lock covers only validation and commit.

use super::Catalogue;
use crate::build::read_catalogue;
use crate::error::Result;
use crate::types::{Entry, EntryId, Event, OwnedResult, SearchOptions};
use parking_lot::{RwLock, RwLockReadGuard};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Cheaply clonable handle to one catalogue.
#[derive(Debug)]
pub struct SharedCatalogue<E = Event> {
    inner: Arc<RwLock<Catalogue<E>>>,
}

impl<E> Clone for SharedCatalogue<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for SharedCatalogue<E> {
    fn default() -> Self {
        Self::new(Catalogue::new())
    }
}

impl<E> SharedCatalogue<E> {
    pub fn new(catalogue: Catalogue<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalogue)),
        }
    }

    /// Hold the read lock, e.g. to run several borrowing searches against
    /// one consistent snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, Catalogue<E>> {
        self.inner.read()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    pub fn has(&self, id: EntryId) -> bool {
        self.inner.read().has(id)
    }

    pub fn add_entry(&self, id: EntryId, name: impl Into<String>, event: E) -> Result<()> {
        self.inner.write().add_entry(id, name, event)
    }

    pub fn extend_entries(&self, entries: Vec<Entry<E>>) -> Result<usize> {
        self.inner.write().extend_entries(entries)
    }

    /// Swap in a wholly new catalogue, e.g. one bulk-loaded off to the side.
    /// Returns the previous one.
    pub fn replace(&self, catalogue: Catalogue<E>) -> Catalogue<E> {
        std::mem::replace(&mut *self.inner.write(), catalogue)
    }
}

impl<E: Clone> SharedCatalogue<E> {
    pub fn get(&self, id: EntryId) -> Option<Entry<E>> {
        self.inner.read().get(id).cloned()
    }

    /// Search under the read lock, returning owned results.
    pub fn search(&self, query: &str, max_results: usize, threshold: f64) -> Vec<OwnedResult<E>> {
        self.search_with(query, &SearchOptions::new(max_results, threshold))
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<OwnedResult<E>> {
        let catalogue = self.inner.read();
        catalogue
            .search_with(query, options)
            .into_iter()
            .map(OwnedResult::from)
            .collect()
    }
}

impl<E: DeserializeOwned + Default> SharedCatalogue<E> {
    /// Load a catalogue file, all or nothing. The file is parsed before the
    /// write lock is taken.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let entries = read_catalogue(path)?;
        let mut catalogue = self.inner.write();
        let added = catalogue.extend_entries(entries)?;
        info!(path = %path.display(), added, total = catalogue.size(), "loaded catalogue");
        Ok(added)
    }
}
