/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! The score-partition tree.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: write path (add, split)
//! - [`find`]: read path (range leaf selection)
//! - [`iter`]: traversal over every leaf

mod find;
mod insert;
mod iter;

pub use iter::LeafDfsIterator;

use index_iterators::DocId;

use crate::{Leaf, TreeConfig};

/// Result of adding a value to the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddResult {
    /// Whether the document id was new to its leaf.
    pub inserted: bool,
    /// Whether the target leaf was split into two.
    pub changed: bool,
}

/// An internal node: scores below `threshold` live in `left`, the others in
/// `right`.
#[derive(Debug)]
pub struct InternalNode {
    threshold: f64,
    left: Box<ScoreNode>,
    right: Box<ScoreNode>,
}

impl InternalNode {
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn left(&self) -> &ScoreNode {
        &self.left
    }

    pub fn right(&self) -> &ScoreNode {
        &self.right
    }

    /// The child a value of `score` is routed to.
    pub fn route(&self, score: f64) -> &ScoreNode {
        if score < self.threshold {
            &self.left
        } else {
            &self.right
        }
    }
}

/// A node of the [`ScoreTree`].
#[derive(Debug)]
pub enum ScoreNode {
    Internal(InternalNode),
    Leaf(Leaf),
}

impl ScoreNode {
    pub const fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Internal(_) => None,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

/// An adaptive binary partition of the score space.
///
/// The tree starts as a single empty leaf. Leaves are split in two once their
/// split counter exceeds [`TreeConfig::leaf_capacity`]; thresholds never move
/// after they are created. The tree is not rebalanced.
#[derive(Debug)]
pub struct ScoreTree {
    root: ScoreNode,
    config: TreeConfig,
    num_leaves: usize,
    num_entries: usize,
}

impl Default for ScoreTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTree {
    /// Default value of [`TreeConfig::leaf_capacity`].
    pub const DEFAULT_LEAF_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub const fn with_config(config: TreeConfig) -> Self {
        Self {
            root: ScoreNode::Leaf(Leaf::new()),
            config,
            num_leaves: 1,
            num_entries: 0,
        }
    }

    /// Build a tree from `(doc_id, score)` pairs, inserted in iteration order.
    pub fn from_entries(
        config: TreeConfig,
        entries: impl IntoIterator<Item = (DocId, f64)>,
    ) -> Self {
        let mut tree = Self::with_config(config);
        tree.extend(entries);
        tree
    }

    pub const fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub const fn root(&self) -> &ScoreNode {
        &self.root
    }

    pub const fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Number of distinct entries stored across all leaves.
    pub const fn num_entries(&self) -> usize {
        self.num_entries
    }

    /// Length of the longest root-to-leaf path; a lone root leaf has depth `0`.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, level)) = stack.pop() {
            match node {
                ScoreNode::Leaf(_) => depth = depth.max(level),
                ScoreNode::Internal(internal) => {
                    stack.push((internal.left(), level + 1));
                    stack.push((internal.right(), level + 1));
                }
            }
        }
        depth
    }

    /// Every leaf, left to right.
    pub fn leaves(&self) -> LeafDfsIterator<'_> {
        LeafDfsIterator::new(self)
    }
}

impl Extend<(DocId, f64)> for ScoreTree {
    fn extend<T: IntoIterator<Item = (DocId, f64)>>(&mut self, iter: T) {
        for (doc_id, score) in iter {
            self.add(doc_id, score);
        }
    }
}

impl FromIterator<(DocId, f64)> for ScoreTree {
    fn from_iter<T: IntoIterator<Item = (DocId, f64)>>(iter: T) -> Self {
        Self::from_entries(TreeConfig::default(), iter)
    }
}
