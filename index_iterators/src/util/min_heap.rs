/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A binary min-heap of `(doc_id, slot)` pairs.
//!
//! Merging iterators keep their sources in a slot vector and only move the
//! small `(doc_id, slot)` pairs around in the heap. Compared to
//! [`std::collections::BinaryHeap`] this offers [`DocIdMinHeap::replace_root`],
//! which re-keys the minimum in place with a single sift-down: the common case
//! when the source that was just consumed still has entries.

use crate::DocId;

/// A min-heap of `(doc_id, slot)` pairs ordered by `doc_id`.
///
/// # Example
///
/// ```
/// use index_iterators::util::DocIdMinHeap;
///
/// let mut heap = DocIdMinHeap::new();
/// heap.push(10, 0);
/// heap.push(5, 1);
///
/// assert_eq!(heap.peek(), Some((5, 1)));
/// heap.replace_root(20, 1);
/// assert_eq!(heap.pop(), Some((10, 0)));
/// assert_eq!(heap.pop(), Some((20, 1)));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocIdMinHeap {
    data: Vec<(DocId, usize)>,
}

impl DocIdMinHeap {
    /// Creates a new empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new heap with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all entries from the heap.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the minimum entry without removing it.
    #[inline]
    pub fn peek(&self) -> Option<(DocId, usize)> {
        self.data.first().copied()
    }

    /// Iterates over the slots currently held, in no particular order.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.data.iter().map(|&(_, slot)| slot)
    }

    /// Pushes an entry onto the heap. O(log n).
    pub fn push(&mut self, doc_id: DocId, slot: usize) {
        self.data.push((doc_id, slot));
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum entry. O(log n).
    pub fn pop(&mut self) -> Option<(DocId, usize)> {
        if self.data.is_empty() {
            return None;
        }
        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(result)
    }

    /// Replaces the root entry in-place and restores the heap property.
    ///
    /// Equivalent to `pop()` followed by `push()`, with a single sift-down.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn replace_root(&mut self, doc_id: DocId, slot: usize) {
        assert!(!self.data.is_empty(), "cannot replace root of empty heap");
        self.data[0] = (doc_id, slot);
        self.sift_down(0);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx].0 >= self.data[parent].0 {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < self.data.len() && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < self.data.len() && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest == idx {
                break;
            }

            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}
