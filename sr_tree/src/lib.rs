/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! SR-tree - an adaptive score-partition tree for numeric range queries.
//!
//! The tree maps document ids to a numeric value ("score") and answers the
//! question "which documents may have a score within `[min, max]`?" at leaf
//! granularity.
//!
//! # Overview
//!
//! - A [`ScoreTree`] is a binary tree whose internal nodes hold a split
//!   threshold (`score < threshold` goes left, `score >= threshold` goes right)
//!   and whose terminal nodes each hold one [`Leaf`].
//! - A [`Leaf`] owns a [`DocIdTree`] (documents keyed by id), the observed
//!   score interval of its entries, and a split-trigger counter.
//! - When a leaf's counter exceeds [`TreeConfig::leaf_capacity`], the leaf is
//!   split in two at a point chosen by its [`SplitPolicy`].
//! - [`ScoreTree::find_range`] selects the leaves that may hold matches, and a
//!   [`LeafIterator`] walks each of them in ascending document id order.
//!
//! The tree is append-only: there is no removal and no score update.
//!
//! # Example
//!
//! ```
//! use sr_tree::ScoreTree;
//!
//! let mut tree = ScoreTree::new();
//! tree.add(1, 10.0);
//! tree.add(2, 20.0);
//! tree.add(3, 15.0);
//!
//! let leaves = tree.find_range(12.0, 20.0);
//! let mut ids: Vec<_> = leaves
//!     .iter()
//!     .flat_map(|leaf| leaf.iter())
//!     .filter(|entry| (12.0..=20.0).contains(&entry.score))
//!     .map(|entry| entry.doc_id)
//!     .collect();
//! ids.sort_unstable();
//! assert_eq!(ids, vec![2, 3]);
//! ```

mod config;
mod doc_tree;
mod leaf;
mod leaf_iter;
mod score_tree;
mod split;

pub use config::TreeConfig;
pub use doc_tree::{DocEntry, DocIdTree};
pub use leaf::Leaf;
pub use leaf_iter::LeafIterator;
pub use score_tree::{AddResult, InternalNode, LeafDfsIterator, ScoreNode, ScoreTree};
pub use split::SplitPolicy;

pub use index_iterators::DocId;
