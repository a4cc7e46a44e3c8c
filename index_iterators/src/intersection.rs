/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Intersection iterator implementation.
//!
//! The intersection iterator finds documents that exist in ALL child iterators.
//! It uses a zipper/merge algorithm that advances through sorted document IDs,
//! finding common documents across all children.

use crate::{DocId, IndexIterator, IndexResult, SkipToOutcome};

/// An iterator that yields documents appearing in ALL of its child iterators.
///
/// This is how a numeric range stream is combined with other index types: the
/// children only need to honour the [`IndexIterator`] contract.
///
/// # Algorithm Overview
///
/// 1. Read on the first child to get a candidate `doc_id`
/// 2. For each subsequent child, skip to that `doc_id`
/// 3. If a child is ahead of the target, the target becomes that child's id
/// 4. If all children match, yield the result
/// 5. Repeat until any child reaches EOF
///
/// Children are sorted by `num_estimated()` (smallest first) so the most
/// selective iterator drives the search.
pub struct Intersection<I> {
    /// The child iterators to intersect, smallest estimate first.
    children: Vec<I>,

    /// `doc_ids[i]` contains the last document ID read from `children[i]`.
    doc_ids: Vec<DocId>,

    /// The last document ID that was found in ALL children.
    last_found_id: DocId,

    /// Whether `result` holds a match, i.e. at least one was found since the
    /// last rewind.
    has_current: bool,

    /// Upper-bound estimate of the number of results.
    num_expected: usize,

    /// Whether the iterator has reached EOF.
    is_eof: bool,

    /// The aggregate result, reused across iterations.
    result: IndexResult,
}

/// Result of trying to get all children to agree on a document ID.
enum AgreeResult {
    /// All children agree on the target docId.
    Agreed,
    /// A child is ahead of the target; contains the new target to try.
    Ahead(DocId),
    /// A child reached EOF; the intersection is exhausted.
    Eof,
}

impl<I: IndexIterator> Intersection<I> {
    /// Creates a new intersection iterator from the given child iterators.
    pub fn new(mut children: Vec<I>) -> Self {
        children.sort_by_key(|c| c.num_estimated());

        let num_children = children.len();
        let num_expected = children.iter().map(|c| c.num_estimated()).min().unwrap_or(0);

        Self {
            children,
            doc_ids: vec![0; num_children],
            last_found_id: 0,
            has_current: false,
            num_expected,
            is_eof: num_children == 0,
            result: IndexResult::aggregate(num_children),
        }
    }

    /// Read the next document ID from the first child iterator.
    fn read_from_first_child(&mut self) -> Option<DocId> {
        let Some(doc_id) = self.children[0].read().map(|r| r.doc_id) else {
            self.is_eof = true;
            return None;
        };
        self.doc_ids[0] = doc_id;
        Some(doc_id)
    }

    /// Try to get all children to agree on the target document ID.
    fn agree_on_doc_id(&mut self, target: DocId) -> AgreeResult {
        for (i, child) in self.children.iter_mut().enumerate() {
            if self.doc_ids[i] == target {
                continue;
            }

            match child.skip_to(target) {
                None => {
                    self.is_eof = true;
                    return AgreeResult::Eof;
                }
                Some(SkipToOutcome::Found(r)) => {
                    self.doc_ids[i] = r.doc_id;
                }
                Some(SkipToOutcome::NotFound(r)) => {
                    self.doc_ids[i] = r.doc_id;
                    return AgreeResult::Ahead(r.doc_id);
                }
            }
        }

        AgreeResult::Agreed
    }

    /// Loop until all children agree on a document ID, or EOF is reached.
    fn find_consensus(&mut self, initial_target: DocId) -> Option<DocId> {
        let mut target = initial_target;
        loop {
            match self.agree_on_doc_id(target) {
                AgreeResult::Agreed => return Some(target),
                AgreeResult::Ahead(new_target) => target = new_target,
                AgreeResult::Eof => return None,
            }
        }
    }

    /// Build the aggregate result from all children's current results.
    fn build_aggregate_result(&mut self, doc_id: DocId) {
        self.last_found_id = doc_id;
        self.has_current = true;
        self.result.doc_id = doc_id;
        self.result
            .set_children(self.children.iter().filter_map(|c| c.current()));
    }
}

impl<I: IndexIterator> IndexIterator for Intersection<I> {
    fn current(&self) -> Option<&IndexResult> {
        self.has_current.then_some(&self.result)
    }

    fn read(&mut self) -> Option<&IndexResult> {
        if self.is_eof {
            return None;
        }

        let target = self.read_from_first_child()?;
        let doc_id = self.find_consensus(target)?;
        self.build_aggregate_result(doc_id);
        Some(&self.result)
    }

    fn skip_to(&mut self, doc_id: DocId) -> Option<SkipToOutcome<'_>> {
        if self.is_eof {
            return None;
        }

        let found_id = self.find_consensus(doc_id)?;
        self.build_aggregate_result(found_id);
        Some(if found_id == doc_id {
            SkipToOutcome::Found(&self.result)
        } else {
            SkipToOutcome::NotFound(&self.result)
        })
    }

    fn rewind(&mut self) {
        self.last_found_id = 0;
        self.has_current = false;
        self.is_eof = self.children.is_empty();
        self.doc_ids.fill(0);
        self.result.set_children(std::iter::empty());
        self.result.doc_id = 0;
        self.children.iter_mut().for_each(|c| c.rewind());
    }

    fn num_estimated(&self) -> usize {
        self.num_expected
    }

    fn last_doc_id(&self) -> DocId {
        self.last_found_id
    }

    fn at_eof(&self) -> bool {
        self.is_eof
    }
}
