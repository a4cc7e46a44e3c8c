/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


use index_iterators::DocId;

use crate::{DocIdTree, LeafIterator};

/// A terminal partition of a [`ScoreTree`](crate::ScoreTree).
///
/// Besides its entries, a leaf tracks the interval of scores observed so far
/// and a split-trigger counter. The counter is incremented on every insert
/// attempt, including duplicates, so it only approximates the leaf size.
#[derive(Debug)]
pub struct Leaf {
    docs: DocIdTree,
    min: f64,
    max: f64,
    split_counter: usize,
}

impl Default for Leaf {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaf {
    /// An empty leaf over the degenerate interval `[0, 0]`.
    pub const fn new() -> Self {
        Self {
            docs: DocIdTree::new(),
            min: 0.0,
            max: 0.0,
            split_counter: 0,
        }
    }

    /// Wrap a freshly split tree, computing the true score interval of its
    /// entries. The split counter starts at the entry count.
    pub(crate) fn from_tree(docs: DocIdTree) -> Self {
        let (min, max) = docs
            .iter()
            .map(|entry| entry.score)
            .fold(None, |acc: Option<(f64, f64)>, score| match acc {
                None => Some((score, score)),
                Some((min, max)) => Some((min.min(score), max.max(score))),
            })
            .unwrap_or((0.0, 0.0));
        let split_counter = docs.len();
        Self {
            docs,
            min,
            max,
            split_counter,
        }
    }

    /// Insert an entry, widening the score interval if needed.
    ///
    /// Returns `true` if `doc_id` was not already present.
    pub(crate) fn add(&mut self, doc_id: DocId, score: f64) -> bool {
        self.split_counter += 1;
        let was_empty = self.docs.is_empty();
        let inserted = self.docs.insert(doc_id, score);
        if inserted {
            if was_empty {
                self.min = score;
                self.max = score;
            } else {
                self.min = self.min.min(score);
                self.max = self.max.max(score);
            }
        }
        inserted
    }

    /// Split at `threshold`.
    ///
    /// On success returns the left (`score < threshold`) and right leaves. If
    /// either side would be empty the split is abandoned and the original
    /// entries come back as a leaf with the same interval and counter.
    pub(crate) fn split(self, threshold: f64) -> Result<(Leaf, Leaf), Leaf> {
        let Self {
            docs,
            min,
            max,
            split_counter,
        } = self;
        match docs.split(threshold) {
            (Some(left), Some(right)) => Ok((Self::from_tree(left), Self::from_tree(right))),
            (Some(docs), None) | (None, Some(docs)) => Err(Self {
                docs,
                min,
                max,
                split_counter,
            }),
            (None, None) => Err(Self {
                split_counter,
                ..Self::new()
            }),
        }
    }

    pub(crate) const fn halve_split_counter(&mut self) {
        self.split_counter /= 2;
    }

    /// Lower bound of the scores observed in this leaf.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the scores observed in this leaf.
    pub const fn max(&self) -> f64 {
        self.max
    }

    pub const fn split_counter(&self) -> usize {
        self.split_counter
    }

    /// Number of distinct documents stored.
    pub const fn len(&self) -> usize {
        self.docs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub const fn docs(&self) -> &DocIdTree {
        &self.docs
    }

    /// Iterate over the entries in ascending document id order.
    pub fn iter(&self) -> LeafIterator<'_> {
        self.docs.iter()
    }

    /// Whether this leaf holds entries and its interval intersects `[min, max]`.
    pub fn overlaps(&self, min: f64, max: f64) -> bool {
        !self.is_empty() && self.min <= max && self.max >= min
    }

    /// Whether this leaf's interval lies entirely within `[min, max]`.
    pub fn contains_range(&self, min: f64, max: f64) -> bool {
        min <= self.min && self.max <= max
    }
}
