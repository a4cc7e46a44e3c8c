/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Per-leaf storage: an unbalanced binary search tree keyed by document id.
//!
//! The shape of a [`DocIdTree`] is determined solely by insertion order. No
//! rebalancing happens on insert. Trees built by [`DocIdTree::split`] are
//! constructed median-first from the already sorted entries, so freshly split
//! leaves start out balanced.

use index_iterators::DocId;

use crate::LeafIterator;

/// A single `(doc_id, score)` pair stored in a leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocEntry {
    pub doc_id: DocId,
    pub score: f64,
}

impl DocEntry {
    pub const fn new(doc_id: DocId, score: f64) -> Self {
        Self { doc_id, score }
    }
}

#[derive(Debug)]
pub(crate) struct DocNode {
    pub(crate) entry: DocEntry,
    pub(crate) left: Option<Box<DocNode>>,
    pub(crate) right: Option<Box<DocNode>>,
}

impl DocNode {
    const fn new(entry: DocEntry) -> Self {
        Self {
            entry,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of [`DocEntry`] keyed by [`DocEntry::doc_id`].
///
/// Inserting a document id that is already present is a no-op: the first
/// stored score wins and [`len`](Self::len) is unchanged.
#[derive(Debug, Default)]
pub struct DocIdTree {
    root: Option<Box<DocNode>>,
    len: usize,
}

impl DocIdTree {
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a tree from entries sorted by ascending, unique document id.
    ///
    /// Entries are inserted median-first so the resulting tree has minimal
    /// height.
    fn from_sorted(entries: &[DocEntry]) -> Self {
        debug_assert!(entries.is_sorted_by(|a, b| a.doc_id < b.doc_id));

        let mut tree = Self::new();
        let mut pending = vec![(0, entries.len())];
        while let Some((start, end)) = pending.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - start) / 2;
            tree.insert(entries[mid].doc_id, entries[mid].score);
            pending.push((mid + 1, end));
            pending.push((start, mid));
        }
        tree
    }

    /// Insert `doc_id` with `score`.
    ///
    /// Returns `true` if a new node was attached, `false` if `doc_id` was
    /// already present.
    pub fn insert(&mut self, doc_id: DocId, score: f64) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match doc_id.cmp(&node.entry.doc_id) {
                std::cmp::Ordering::Equal => return false,
                std::cmp::Ordering::Less => &mut node.left,
                std::cmp::Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Box::new(DocNode::new(DocEntry::new(doc_id, score))));
        self.len += 1;
        true
    }

    /// Look up the score stored for `doc_id`.
    pub fn get(&self, doc_id: DocId) -> Option<f64> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match doc_id.cmp(&node.entry.doc_id) {
                std::cmp::Ordering::Equal => return Some(node.entry.score),
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Number of distinct document ids stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; `0` for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&DocNode, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left.as_deref().map(|n| (n, level + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        height
    }

    /// Iterate over the entries in ascending document id order.
    pub fn iter(&self) -> LeafIterator<'_> {
        LeafIterator::new(self)
    }

    pub(crate) fn root(&self) -> Option<&DocNode> {
        self.root.as_deref()
    }

    /// Consume the tree and redistribute its entries into two new trees:
    /// entries with `score < threshold` go left, the rest go right.
    ///
    /// A side that receives no entries is returned as `None`.
    pub fn split(self, threshold: f64) -> (Option<DocIdTree>, Option<DocIdTree>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for entry in self.iter() {
            if entry.score < threshold {
                left.push(entry);
            } else {
                right.push(entry);
            }
        }

        let build =
            |entries: Vec<DocEntry>| (!entries.is_empty()).then(|| Self::from_sorted(&entries));
        (build(left), build(right))
    }
}

impl<'tree> IntoIterator for &'tree DocIdTree {
    type Item = DocEntry;
    type IntoIter = LeafIterator<'tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Trees grown from ascending document ids degenerate into a list, so the
// nodes are released with an explicit stack instead of recursive drops.
impl Drop for DocIdTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<DocNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
