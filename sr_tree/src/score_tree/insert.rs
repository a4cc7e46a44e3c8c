/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Write path: insertion and leaf splitting.

use index_iterators::DocId;

use super::{AddResult, InternalNode, ScoreNode, ScoreTree};
use crate::{Leaf, SplitPolicy};

impl ScoreTree {
    /// Add a `(doc_id, score)` pair.
    ///
    /// The value is routed to the leaf owning `score`. Adding a document id
    /// that the leaf already holds keeps the first score but still counts
    /// towards the leaf's split trigger.
    pub fn add(&mut self, doc_id: DocId, score: f64) -> AddResult {
        let capacity = self.config.leaf_capacity;
        let policy = self.config.split_policy;

        let mut node = &mut self.root;
        while let ScoreNode::Internal(internal) = node {
            node = if score < internal.threshold {
                &mut internal.left
            } else {
                &mut internal.right
            };
        }

        let ScoreNode::Leaf(leaf) = node else {
            unreachable!("descent stops at a leaf")
        };
        let inserted = leaf.add(doc_id, score);
        let changed = leaf.split_counter() > capacity && Self::split_node(node, policy);

        if inserted {
            self.num_entries += 1;
        }
        if changed {
            self.num_leaves += 1;
        }
        AddResult { inserted, changed }
    }

    /// Try to turn the leaf at `node` into an internal node with two leaf
    /// children.
    ///
    /// If the split point would leave one side empty, the leaf is kept and its
    /// split counter halved so the next attempt is deferred.
    fn split_node(node: &mut ScoreNode, policy: SplitPolicy) -> bool {
        let ScoreNode::Leaf(leaf) = node else {
            return false;
        };
        let threshold = policy.split_point(leaf);
        let leaf = std::mem::take(leaf);

        match leaf.split(threshold) {
            Ok((left, right)) => {
                tracing::debug!(
                    threshold,
                    left_len = left.len(),
                    right_len = right.len(),
                    "split leaf"
                );
                *node = ScoreNode::Internal(InternalNode {
                    threshold,
                    left: Box::new(ScoreNode::Leaf(left)),
                    right: Box::new(ScoreNode::Leaf(right)),
                });
                true
            }
            Err(mut leaf) => {
                leaf.halve_split_counter();
                tracing::debug!(
                    threshold,
                    len = leaf.len(),
                    split_counter = leaf.split_counter(),
                    "abandoned leaf split"
                );
                *node = ScoreNode::Leaf(leaf);
                false
            }
        }
    }
}
