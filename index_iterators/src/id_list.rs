/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! ID-list iterator implementation
use std::cmp::min;

use crate::{DocId, IndexIterator, IndexResult, SkipToOutcome};

/// An iterator that yields results according to an IDs list given on construction.
#[derive(Debug)]
pub struct IdList {
    /// The list of document IDs to iterate over. Must be sorted and unique.
    ids: Vec<DocId>,
    /// The position of the next document ID to return by `read`.
    /// When `offset` is equal to the length of `ids`, the iterator is at EOF.
    offset: usize,
    /// A reusable result object to avoid allocations on each `read` call.
    result: IndexResult,
}

impl IdList {
    /// Creates a new ID list iterator. The list of document IDs must be sorted and unique.
    pub fn new(ids: Vec<DocId>) -> Self {
        Self::new_with_result(ids, IndexResult::virt())
    }

    /// Same as [`IdList::new`] but with a custom [`IndexResult`] template.
    pub fn new_with_result(ids: Vec<DocId>, result: IndexResult) -> Self {
        debug_assert!(
            ids.is_sorted_by(|a, b| a < b),
            "IDs must be sorted and unique"
        );
        Self {
            ids,
            offset: 0,
            result,
        }
    }

    #[inline(always)]
    fn get_current(&self) -> Option<DocId> {
        self.ids.get(self.offset).copied()
    }
}

impl IndexIterator for IdList {
    fn current(&self) -> Option<&IndexResult> {
        (self.offset > 0).then_some(&self.result)
    }

    #[inline(always)]
    fn read(&mut self) -> Option<&IndexResult> {
        let doc_id = self.get_current()?;
        self.offset += 1;
        self.result.doc_id = doc_id;
        Some(&self.result)
    }

    fn skip_to(&mut self, doc_id: DocId) -> Option<SkipToOutcome<'_>> {
        match self.ids.last() {
            Some(&last) if !self.at_eof() && last >= doc_id => {}
            _ => {
                self.offset = self.ids.len();
                return None;
            }
        }

        // Already positioned on or past the target.
        if self.offset > 0 && self.last_doc_id() >= doc_id {
            return Some(if self.result.doc_id == doc_id {
                SkipToOutcome::Found(&self.result)
            } else {
                SkipToOutcome::NotFound(&self.result)
            });
        }

        // The list holds unique ids, so the target can be at most
        // `doc_id - last_doc_id` positions ahead of the current offset.
        let distance = usize::try_from(doc_id - self.last_doc_id()).unwrap_or(usize::MAX);
        let top = min(
            self.offset.saturating_add(distance).saturating_add(1),
            self.ids.len(),
        );
        let (pos, found) = match self.ids[self.offset..top].binary_search(&doc_id) {
            Ok(pos) => (self.offset + pos, true),
            Err(pos) => (self.offset + pos, false),
        };
        self.offset = pos + 1;
        self.result.doc_id = self.ids[pos];

        Some(if found {
            SkipToOutcome::Found(&self.result)
        } else {
            SkipToOutcome::NotFound(&self.result)
        })
    }

    fn rewind(&mut self) {
        self.offset = 0;
        self.result.doc_id = 0;
    }

    fn num_estimated(&self) -> usize {
        self.ids.len()
    }

    #[inline(always)]
    fn last_doc_id(&self) -> DocId {
        match self.offset {
            0 => 0,
            _ => self.ids[self.offset - 1],
        }
    }

    #[inline(always)]
    fn at_eof(&self) -> bool {
        self.get_current().is_none()
    }
}
