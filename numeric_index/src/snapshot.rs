/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Lazily built in-memory view of a numeric index.

use std::sync::OnceLock;

use sr_tree::{ScoreTree, TreeConfig};

use crate::ScoreStore;

/// Holds the [`ScoreTree`] hydrated from a [`ScoreStore`].
///
/// The tree is built at most once per snapshot, either explicitly or by the
/// first query. Concurrent first queries through a shared reference block on
/// a single build.
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    tree: OnceLock<ScoreTree>,
}

impl IndexSnapshot {
    pub const fn new() -> Self {
        Self {
            tree: OnceLock::new(),
        }
    }

    /// The built tree, if any.
    pub fn get(&self) -> Option<&ScoreTree> {
        self.tree.get()
    }

    pub fn is_built(&self) -> bool {
        self.tree.get().is_some()
    }

    /// Return the tree, hydrating it from `store` first if needed.
    ///
    /// Without a store the tree is empty.
    pub fn get_or_build<S: ScoreStore>(&self, store: Option<&S>, config: TreeConfig) -> &ScoreTree {
        self.tree.get_or_init(|| hydrate(store, config))
    }

    /// Rebuild the tree from `store`, replacing any previous one.
    pub fn build<S: ScoreStore>(&mut self, store: Option<&S>, config: TreeConfig) -> &ScoreTree {
        self.invalidate();
        self.get_or_build(store, config)
    }

    /// Drop the built tree; the next access rebuilds it.
    pub fn invalidate(&mut self) {
        self.tree.take();
    }
}

fn hydrate<S: ScoreStore>(store: Option<&S>, config: TreeConfig) -> ScoreTree {
    let mut tree = ScoreTree::with_config(config);
    if let Some(store) = store {
        tree.extend(store.scan_by_score());
    }
    tracing::info!(
        entries = tree.num_entries(),
        leaves = tree.num_leaves(),
        depth = tree.depth(),
        "built numeric index snapshot"
    );
    tree
}
