/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Empty iterator implementation

use crate::{DocId, IndexIterator, IndexResult, SkipToOutcome};

/// An iterator that yields no results.
///
/// Useful as an intersection child that is known to match nothing.
#[derive(Debug, Default)]
pub struct Empty;

impl IndexIterator for Empty {
    fn current(&self) -> Option<&IndexResult> {
        None
    }

    fn read(&mut self) -> Option<&IndexResult> {
        None
    }

    fn skip_to(&mut self, _doc_id: DocId) -> Option<SkipToOutcome<'_>> {
        None
    }

    fn rewind(&mut self) {}

    fn num_estimated(&self) -> usize {
        0
    }

    fn last_doc_id(&self) -> DocId {
        0
    }

    fn at_eof(&self) -> bool {
        true
    }
}
