/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


use crate::{ScoreTree, SplitPolicy};

/// Tuning knobs of a [`ScoreTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// A leaf is split once its split counter exceeds this value.
    pub leaf_capacity: usize,
    pub split_policy: SplitPolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            leaf_capacity: ScoreTree::DEFAULT_LEAF_CAPACITY,
            split_policy: SplitPolicy::Midpoint,
        }
    }
}

impl TreeConfig {
    pub const fn with_leaf_capacity(mut self, leaf_capacity: usize) -> Self {
        self.leaf_capacity = leaf_capacity;
        self
    }

    pub const fn with_split_policy(mut self, split_policy: SplitPolicy) -> Self {
        self.split_policy = split_policy;
        self
    }
}
