/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Read path: range leaf selection.

use super::{LeafDfsIterator, ScoreNode, ScoreTree};
use crate::Leaf;

impl ScoreTree {
    /// Find the leaves that may hold entries with a score within `[min, max]`.
    ///
    /// Every entry whose score lies in `[min, max]` is stored in one of the
    /// returned leaves; the leaves may also hold entries outside of it. Leaves
    /// are returned in ascending score order. Empty leaves, and leaves whose
    /// observed interval does not intersect `[min, max]`, are omitted.
    ///
    /// Infinite bounds are allowed. An inverted range or a NaN bound selects
    /// nothing.
    ///
    /// # Algorithm
    ///
    /// A min-path and a max-path descend together while they route through the
    /// same nodes. Once they diverge, every subtree lying strictly between the
    /// two paths is fully inside the range: the min-path collects the right
    /// subtree of each node where it turns left, the max-path the left subtree
    /// of each node where it turns right. Both boundary leaves are kept (once
    /// if the paths never diverge) and collected subtrees are expanded to their
    /// leaves with an explicit stack.
    pub fn find_range(&self, min: f64, max: f64) -> Vec<&Leaf> {
        let mut leaves = Vec::with_capacity(8);
        if min.is_nan() || max.is_nan() || min > max {
            return leaves;
        }

        let mut min_node = &self.root;
        let mut max_node = &self.root;
        while let ScoreNode::Internal(internal) = min_node {
            min_node = internal.route(min);
            max_node = internal.route(max);
            if !std::ptr::eq(min_node, max_node) {
                break;
            }
        }

        // Deeper subtrees on the min-path hold lower scores, so this one is
        // reversed before use.
        let mut low_subtrees = Vec::new();
        while let ScoreNode::Internal(internal) = min_node {
            if min < internal.threshold() {
                low_subtrees.push(internal.right());
            }
            min_node = internal.route(min);
        }
        let mut high_subtrees = Vec::new();
        while let ScoreNode::Internal(internal) = max_node {
            if max >= internal.threshold() {
                high_subtrees.push(internal.left());
            }
            max_node = internal.route(max);
        }

        let boundary_max = (!std::ptr::eq(min_node, max_node)).then_some(max_node);
        let nodes = std::iter::once(min_node)
            .chain(low_subtrees.into_iter().rev())
            .chain(high_subtrees)
            .chain(boundary_max);
        leaves.extend(
            nodes
                .flat_map(LeafDfsIterator::from_node)
                .filter(|leaf| leaf.overlaps(min, max)),
        );

        debug_assert!(
            leaves.len() < 3
                || leaves[1..leaves.len() - 1]
                    .iter()
                    .all(|leaf| leaf.contains_range(min, max)),
            "interior leaves must lie inside the range"
        );
        leaves
    }
}
