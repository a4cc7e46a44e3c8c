/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Shared helpers for the integration tests.

use index_iterators::{DocId, IndexIterator};
use sr_tree::{ScoreTree, TreeConfig};

/// Read every remaining document id from `it`.
pub fn drain(it: &mut impl IndexIterator) -> Vec<DocId> {
    let mut ids = Vec::new();
    while let Some(result) = it.read() {
        ids.push(result.doc_id);
    }
    ids
}

/// A tree with `count` documents whose score is `doc_id % 100`, split into
/// leaves of at most `capacity` entries.
pub fn modulo_tree(count: u64, capacity: usize) -> ScoreTree {
    ScoreTree::from_entries(
        TreeConfig::default().with_leaf_capacity(capacity),
        (1..=count).map(|doc_id| (doc_id, (doc_id % 100) as f64)),
    )
}
