/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


use index_iterators::DocId;
use sr_tree::ScoreTree;

use crate::{
    IndexConfig, IndexError, IndexSnapshot, Keyspace, NumericRangeIterator, RangeFilter,
    RefreshPolicy, ScoreStore, SortedSetHandle,
};

/// Name of the key holding the values of `field` in the index `index_name`.
///
/// ```
/// assert_eq!(numeric_index::key_name("products", "price"), "num:products/price");
/// ```
pub fn key_name(index_name: &str, field: &str) -> String {
    format!("num:{index_name}/{field}")
}

/// A numeric field index: a persisted [`ScoreStore`] plus the in-memory
/// snapshot used to answer range queries.
///
/// An index whose key could not be bound to a store is unusable: writes fail
/// with [`IndexError::Unusable`] and queries yield nothing.
#[derive(Debug)]
pub struct NumericIndex<S = SortedSetHandle> {
    key: String,
    store: Option<S>,
    config: IndexConfig,
    snapshot: IndexSnapshot,
}

impl NumericIndex<SortedSetHandle> {
    /// Bind the index for `field` of `index_name` to its sorted set in
    /// `keyspace`, creating the set if needed.
    pub fn open(keyspace: &mut Keyspace, index_name: &str, field: &str, config: IndexConfig) -> Self {
        let key = key_name(index_name, field);
        let store = match keyspace.open_sorted_set(&key) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%key, %err, "numeric index key cannot be opened, index is unusable");
                None
            }
        };
        Self::with_store(key, store, config)
    }
}

impl<S: ScoreStore> NumericIndex<S> {
    /// Wrap an already bound store. `None` produces an unusable index.
    pub fn with_store(key: impl Into<String>, store: Option<S>, config: IndexConfig) -> Self {
        Self {
            key: key.into(),
            store,
            config,
            snapshot: IndexSnapshot::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub const fn is_usable(&self) -> bool {
        self.store.is_some()
    }

    pub const fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub const fn snapshot(&self) -> &IndexSnapshot {
        &self.snapshot
    }

    /// Persist `score` for `doc_id`. Returns `true` if the document was new
    /// to the store.
    ///
    /// Under [`RefreshPolicy::InvalidateOnWrite`] the snapshot is dropped so the
    /// next query sees the write.
    pub fn add(&mut self, doc_id: DocId, score: f64) -> Result<bool, IndexError> {
        let Some(store) = self.store.as_mut() else {
            return Err(IndexError::Unusable {
                key: self.key.clone(),
            });
        };
        let added = store.add(doc_id, score)?;
        if self.config.refresh == RefreshPolicy::InvalidateOnWrite {
            self.snapshot.invalidate();
        }
        Ok(added)
    }

    /// Rebuild the snapshot from the store now.
    pub fn build(&mut self) -> &ScoreTree {
        self.snapshot.build(self.store.as_ref(), self.config.tree)
    }

    /// The current snapshot tree, built on first use.
    pub fn tree(&self) -> &ScoreTree {
        self.snapshot.get_or_build(self.store.as_ref(), self.config.tree)
    }

    /// Iterate the documents matching `filter` in ascending document id order.
    pub fn iterator(&self, filter: RangeFilter) -> NumericRangeIterator<'_> {
        NumericRangeIterator::new(self.tree(), filter, self.config.filter_mode)
    }
}
