// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded best-of-K selection over a stream.
//!
//! A min-heap of at most K items whose root is the worst item kept. A new
//! item is compared against the root in O(1); only if it is strictly better
//! does it replace the root, at O(log K). The stream is never stored or
//! sorted.
//!
//! # Tie-break
//!
//! "Worst" is the least item under `T`'s `Ord`. Among items that compare
//! equal, the earliest inserted is the worst and goes first. An incoming item
//! equal to the current worst is not strictly better and is dropped, so with
//! ties the earliest arrivals that made it in are the ones at risk.
//!
//! # Example
//!
//! ```
//! use catfind::TopK;
//!
//! let mut top = TopK::new(3);
//! for n in [74, 49, 27, 60, 70] {
//!     top.push(n);
//! }
//! assert_eq!(top.into_sorted_vec(), vec![74, 70, 60]);
//! ```

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Largest heap allocated up front.
const PREALLOCATE_LIMIT: usize = 1024;

/// An item plus its arrival number, ordered by item then arrival.
#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    seq: u64,
}

impl<T: Ord> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Slot<T> {}

impl<T: Ord> PartialOrd for Slot<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Slot<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier arrival is smaller, i.e. worse
        self.item.cmp(&other.item).then(self.seq.cmp(&other.seq))
    }
}

/// Keeps the K greatest items pushed so far.
#[derive(Debug, Clone)]
pub struct TopK<T> {
    capacity: usize,
    // Reverse turns the max-heap into a min-heap: the root is the worst slot
    heap: BinaryHeap<Reverse<Slot<T>>>,
    next_seq: u64,
}

impl<T: Ord> TopK<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // Capacity may be usize::MAX, meaning "keep everything"
            heap: BinaryHeap::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            next_seq: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The item that would be evicted next, if any.
    pub fn worst(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(slot)| &slot.item)
    }

    /// Offer an item. Returns whether it was kept.
    pub fn push(&mut self, item: T) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(Slot { item, seq }));
            return true;
        }

        // Capacity zero: nothing to compare against, nothing kept
        let Some(mut root) = self.heap.peek_mut() else {
            return false;
        };
        if item > root.0.item {
            // Writing through PeekMut sifts the new root down once on drop
            *root = Reverse(Slot { item, seq });
            true
        } else {
            false
        }
    }

    /// Items currently held, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.heap.iter().map(|Reverse(slot)| &slot.item)
    }

    /// Held items, in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().map(|Reverse(slot)| slot.item).collect()
    }

    /// Held items, greatest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // Ascending under Reverse is descending under Slot
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(slot)| slot.item)
            .collect()
    }
}

impl<T: Ord> Extend<T> for TopK<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
