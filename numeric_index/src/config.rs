/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


use sr_tree::TreeConfig;

use crate::FilterMode;

/// What happens to a built snapshot when the index receives a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Keep serving the snapshot; writes become visible after an explicit
    /// [`NumericIndex::build`](crate::NumericIndex::build).
    AllowStale,
    /// Drop the snapshot on every successful write; the next query rebuilds it.
    #[default]
    InvalidateOnWrite,
}

/// Configuration of a [`NumericIndex`](crate::NumericIndex).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexConfig {
    pub tree: TreeConfig,
    pub filter_mode: FilterMode,
    pub refresh: RefreshPolicy,
}

impl IndexConfig {
    pub const fn with_tree(mut self, tree: TreeConfig) -> Self {
        self.tree = tree;
        self
    }

    pub const fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    pub const fn with_refresh(mut self, refresh: RefreshPolicy) -> Self {
        self.refresh = refresh;
        self
    }
}
