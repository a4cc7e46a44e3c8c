/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Merge iterator over the leaves selected by a range query.

use index_iterators::util::DocIdMinHeap;
use index_iterators::{DocId, IndexIterator, IndexResult, ResultData, SkipToOutcome};
use sr_tree::{DocEntry, Leaf, LeafIterator, ScoreTree};

use crate::RangeFilter;

/// When entries are checked against the [`RangeFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Every yielded entry matches the filter.
    #[default]
    Exact,
    /// The first entry of each selected leaf is yielded without being checked;
    /// every later entry has matched the filter before being queued.
    ///
    /// The stream may therefore contain up to one non-matching entry per
    /// selected leaf. Those come from leaves whose score interval overlaps the
    /// query, so the stream is still a superset of the exact matches.
    Deferred,
}

/// A k-way merge of the leaves matching a [`RangeFilter`], yielding entries in
/// ascending document id order.
///
/// Each selected leaf is walked by its own [`LeafIterator`]; a min-heap keyed by
/// the iterators' current document id decides which one advances next.
#[derive(Debug)]
pub struct NumericRangeIterator<'tree> {
    filter: RangeFilter,
    mode: FilterMode,
    leaves: Vec<&'tree Leaf>,
    /// One slot per selected leaf; `None` once that leaf is exhausted.
    cursors: Vec<Option<LeafIterator<'tree>>>,
    heap: DocIdMinHeap,
    result: IndexResult,
    has_current: bool,
    last_doc_id: DocId,
    num_estimated: usize,
    is_eof: bool,
}

impl<'tree> NumericRangeIterator<'tree> {
    /// Select the leaves of `tree` that overlap `filter` and merge them.
    pub fn new(tree: &'tree ScoreTree, filter: RangeFilter, mode: FilterMode) -> Self {
        let (min, max) = filter.selection_bounds();
        Self::from_leaves(tree.find_range(min, max), filter, mode)
    }

    /// Merge an explicit set of leaves.
    pub fn from_leaves(leaves: Vec<&'tree Leaf>, filter: RangeFilter, mode: FilterMode) -> Self {
        let num_estimated = leaves.iter().map(|leaf| leaf.len()).sum();
        let mut iterator = Self {
            filter,
            mode,
            cursors: Vec::with_capacity(leaves.len()),
            heap: DocIdMinHeap::with_capacity(leaves.len()),
            leaves,
            result: IndexResult::numeric(0.0),
            has_current: false,
            last_doc_id: 0,
            num_estimated,
            is_eof: false,
        };
        iterator.seed();
        iterator
    }

    pub const fn filter(&self) -> &RangeFilter {
        &self.filter
    }

    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Number of leaves the query selected.
    pub fn num_leaves(&self) -> usize {
        self.leaves.len()
    }

    /// Open one cursor per leaf and queue those that have a first entry.
    fn seed(&mut self) {
        let filter = self.filter;
        self.cursors.clear();
        self.heap.clear();

        for (slot, &leaf) in self.leaves.iter().enumerate() {
            let mut cursor = leaf.iter();
            let first = match self.mode {
                FilterMode::Deferred => cursor.next(),
                FilterMode::Exact => cursor.find(|entry| filter.matches(entry.score)),
            };
            match first {
                Some(entry) => {
                    self.heap.push(entry.doc_id, slot);
                    self.cursors.push(Some(cursor));
                }
                None => self.cursors.push(None),
            }
        }
    }

    /// Take the queued entry with the lowest document id and advance its cursor
    /// to the next matching entry.
    fn next_entry(&mut self) -> Option<DocEntry> {
        let (_, slot) = self.heap.peek()?;
        let cursor = self.cursors.get_mut(slot)?.as_mut()?;
        let entry = cursor.current()?;

        let filter = self.filter;
        match cursor.find(|next| filter.matches(next.score)) {
            Some(next) => self.heap.replace_root(next.doc_id, slot),
            None => {
                self.heap.pop();
                self.cursors[slot] = None;
            }
        }
        Some(entry)
    }

    fn set_current(&mut self, entry: DocEntry) {
        self.last_doc_id = entry.doc_id;
        self.result.doc_id = entry.doc_id;
        self.result.data = ResultData::Numeric(entry.score);
        self.has_current = true;
    }
}

impl IndexIterator for NumericRangeIterator<'_> {
    fn current(&self) -> Option<&IndexResult> {
        self.has_current.then_some(&self.result)
    }

    fn read(&mut self) -> Option<&IndexResult> {
        if self.is_eof {
            return None;
        }
        let Some(entry) = self.next_entry() else {
            self.is_eof = true;
            return None;
        };
        self.set_current(entry);
        Some(&self.result)
    }

    fn skip_to(&mut self, doc_id: DocId) -> Option<SkipToOutcome<'_>> {
        if self.is_eof {
            return None;
        }

        // Linear scan: leaves are only ordered by score, not by document id.
        while !self.has_current || self.last_doc_id < doc_id {
            let Some(entry) = self.next_entry() else {
                self.is_eof = true;
                return None;
            };
            self.set_current(entry);
        }

        Some(if self.last_doc_id == doc_id {
            SkipToOutcome::Found(&self.result)
        } else {
            SkipToOutcome::NotFound(&self.result)
        })
    }

    fn rewind(&mut self) {
        self.is_eof = false;
        self.has_current = false;
        self.last_doc_id = 0;
        self.result.doc_id = 0;
        self.seed();
    }

    fn num_estimated(&self) -> usize {
        self.num_estimated
    }

    fn last_doc_id(&self) -> DocId {
        self.last_doc_id
    }

    fn at_eof(&self) -> bool {
        self.is_eof
    }
}
