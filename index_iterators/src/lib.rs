/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Sequential, docId-ascending iterators shared by every index type.
//!
//! Every index (full-text postings, numeric ranges, ID lists, ...) exposes its
//! matches through the [`IndexIterator`] trait, which lets the query engine
//! combine them (e.g. with [`Intersection`]) without knowing where the
//! documents come from.

pub mod empty;
pub mod id_list;
pub mod intersection;
pub mod result;
pub mod util;

pub use empty::Empty;
pub use id_list::IdList;
pub use intersection::Intersection;
pub use result::{FIELD_MASK_ALL, FieldMask, IndexResult, ResultData};

/// Stable identifier of a document in the search engine.
pub type DocId = u64;

#[derive(Debug, PartialEq)]
/// The outcome of [`IndexIterator::skip_to`].
pub enum SkipToOutcome<'iterator> {
    /// The iterator has a valid entry for the requested `doc_id`.
    Found(&'iterator IndexResult),

    /// The iterator doesn't have an entry for the requested `doc_id`, but it is
    /// now positioned on an entry with a greater id.
    NotFound(&'iterator IndexResult),
}

impl<'iterator> SkipToOutcome<'iterator> {
    /// The result the iterator is positioned on, regardless of the outcome.
    pub const fn result(&self) -> &'iterator IndexResult {
        match *self {
            Self::Found(result) | Self::NotFound(result) => result,
        }
    }
}

/// The sequential iterator contract.
///
/// Results are produced in ascending `doc_id` order. Releasing an iterator is
/// done by dropping it.
pub trait IndexIterator {
    /// Return the current [`IndexResult`], i.e. the one last returned by
    /// [`IndexIterator::read`] or [`IndexIterator::skip_to`].
    fn current(&self) -> Option<&IndexResult>;

    /// Read the next entry from the iterator.
    ///
    /// On a successful read the iterator must set its `last_doc_id` to the id of
    /// the returned result. Returns `None` once the iterator is depleted.
    fn read(&mut self) -> Option<&IndexResult>;

    /// Skip to the first entry with an id greater or equal to `doc_id`.
    ///
    /// Returns [`SkipToOutcome::Found`] if an entry for `doc_id` exists,
    /// [`SkipToOutcome::NotFound`] if the iterator stopped on a greater id and
    /// `None` if the iterator ran out of entries.
    fn skip_to(&mut self, doc_id: DocId) -> Option<SkipToOutcome<'_>>;

    /// Rewind the iterator to the beginning and reset its properties.
    fn rewind(&mut self);

    /// Returns an upper-bound estimation for the number of results the iterator is going to yield.
    fn num_estimated(&self) -> usize;

    /// Returns the last doc id that was read or skipped to.
    fn last_doc_id(&self) -> DocId;

    /// Returns `true` once the iterator has proven it has no more results.
    fn at_eof(&self) -> bool;

    /// Returns `true` until the iterator has proven it has no more results.
    ///
    /// This never probes ahead: an iterator may report `true` and still return
    /// `None` from the next [`IndexIterator::read`].
    fn has_next(&self) -> bool {
        !self.at_eof()
    }
}

impl<I: IndexIterator + ?Sized> IndexIterator for Box<I> {
    fn current(&self) -> Option<&IndexResult> {
        (**self).current()
    }

    fn read(&mut self) -> Option<&IndexResult> {
        (**self).read()
    }

    fn skip_to(&mut self, doc_id: DocId) -> Option<SkipToOutcome<'_>> {
        (**self).skip_to(doc_id)
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }

    fn num_estimated(&self) -> usize {
        (**self).num_estimated()
    }

    fn last_doc_id(&self) -> DocId {
        (**self).last_doc_id()
    }

    fn at_eof(&self) -> bool {
        (**self).at_eof()
    }
}
