/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Numeric range index over an [SR-tree](sr_tree).
//!
//! A [`NumericIndex`] persists `(doc_id, score)` pairs in a [`ScoreStore`] and
//! answers range queries from an in-memory [`ScoreTree`](sr_tree::ScoreTree)
//! snapshot. Queries are expressed as a [`RangeFilter`] and produce a
//! [`NumericRangeIterator`], which implements the
//! [`IndexIterator`](index_iterators::IndexIterator) contract so its results
//! can be intersected with other index streams.
//!
//! ```
//! use index_iterators::IndexIterator;
//! use numeric_index::{IndexConfig, Keyspace, NumericIndex, RangeFilter};
//!
//! let mut keyspace = Keyspace::new();
//! let mut index = NumericIndex::open(&mut keyspace, "products", "price", IndexConfig::default());
//! index.add(1, 9.99).unwrap();
//! index.add(2, 120.0).unwrap();
//! index.add(3, 45.5).unwrap();
//!
//! let filter = RangeFilter::parse(&["price", "(10", "+inf"]).unwrap();
//! let mut it = index.iterator(filter.range);
//! let mut ids = Vec::new();
//! while let Some(result) = it.read() {
//!     ids.push(result.doc_id);
//! }
//! assert_eq!(ids, vec![2, 3]);
//! ```

mod config;
mod error;
mod filter;
mod index;
mod iterator;
mod keyspace;
mod snapshot;
mod store;

pub use config::{IndexConfig, RefreshPolicy};
pub use error::{IndexError, StoreError};
pub use filter::{FieldFilter, FilterParseError, RangeFilter};
pub use index::{NumericIndex, key_name};
pub use iterator::{FilterMode, NumericRangeIterator};
pub use keyspace::{KeyType, Keyspace, Value};
pub use snapshot::IndexSnapshot;
pub use store::{ScoreScan, ScoreStore, SortedSet, SortedSetHandle};
