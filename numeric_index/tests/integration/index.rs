/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Tests for [`NumericIndex`] and its store binding.

use index_iterators::IndexIterator;
use numeric_index::{
    FilterMode, IndexConfig, IndexError, KeyType, Keyspace, NumericIndex, RangeFilter,
    RefreshPolicy, ScoreStore, StoreError, Value, key_name,
};
use pretty_assertions::assert_eq;
use sr_tree::TreeConfig;

use crate::helpers::drain;

fn open(keyspace: &mut Keyspace, config: IndexConfig) -> NumericIndex {
    index_tracing::init_for_tests();
    NumericIndex::open(keyspace, "products", "price", config)
}

#[test]
fn key_naming() {
    assert_eq!(key_name("idx", "age"), "num:idx/age");
    let mut keyspace = Keyspace::new();
    let index = open(&mut keyspace, IndexConfig::default());
    assert_eq!(index.key(), "num:products/price");
    assert_eq!(keyspace.key_type("num:products/price"), Some(KeyType::ZSet));
}

#[test]
fn add_then_query() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    for (doc_id, price) in [(1, 5.0), (2, 50.0), (3, 15.0), (4, 10.0)] {
        assert_eq!(index.add(doc_id, price), Ok(true));
    }
    assert!(!index.snapshot().is_built());

    let mut it = index.iterator(RangeFilter::inclusive(10.0, 20.0));
    assert_eq!(drain(&mut it), vec![3, 4]);
    assert!(index.snapshot().is_built());
}

#[test]
fn members_are_decimal_doc_ids() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    index.add(42, 1.5).unwrap();

    let Some(Value::ZSet(set)) = keyspace.get("num:products/price") else {
        panic!("expected a sorted set");
    };
    assert_eq!(set.read().score("42"), Some(1.5));
}

#[test]
fn add_upserts_score() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    assert_eq!(index.add(1, 5.0), Ok(true));
    assert_eq!(index.add(1, 50.0), Ok(false));

    assert_eq!(index.tree().num_entries(), 1);
    let mut it = index.iterator(RangeFilter::inclusive(40.0, 60.0));
    assert_eq!(drain(&mut it), vec![1]);
}

#[test]
fn wrong_key_type_makes_index_unusable() {
    let mut keyspace = Keyspace::new();
    keyspace.set("num:products/price", Value::List(vec!["a".to_owned()]));
    let mut index = open(&mut keyspace, IndexConfig::default());

    assert!(!index.is_usable());
    assert_eq!(
        index.add(1, 1.0),
        Err(IndexError::Unusable {
            key: "num:products/price".to_owned()
        })
    );
    let mut it = index.iterator(RangeFilter::unbounded());
    assert!(it.read().is_none());
    assert!(it.at_eof());
    assert_eq!(index.tree().num_entries(), 0);
    // The foreign value is left untouched.
    assert_eq!(keyspace.key_type("num:products/price"), Some(KeyType::List));
}

#[test]
fn nan_score_is_a_store_error() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    assert_eq!(
        index.add(1, f64::NAN),
        Err(IndexError::Store(StoreError::NotANumber {
            key: "num:products/price".to_owned()
        }))
    );
}

#[test]
fn invalidate_on_write_sees_new_entries() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    index.add(1, 1.0).unwrap();
    assert_eq!(drain(&mut index.iterator(RangeFilter::unbounded())), vec![1]);

    index.add(2, 2.0).unwrap();
    assert!(!index.snapshot().is_built());
    assert_eq!(drain(&mut index.iterator(RangeFilter::unbounded())), vec![1, 2]);
}

#[test]
fn allow_stale_needs_explicit_build() {
    let mut keyspace = Keyspace::new();
    let config = IndexConfig::default().with_refresh(RefreshPolicy::AllowStale);
    let mut index = open(&mut keyspace, config);
    index.add(1, 1.0).unwrap();
    assert_eq!(drain(&mut index.iterator(RangeFilter::unbounded())), vec![1]);

    index.add(2, 2.0).unwrap();
    assert!(index.snapshot().is_built());
    assert_eq!(drain(&mut index.iterator(RangeFilter::unbounded())), vec![1]);

    assert_eq!(index.build().num_entries(), 2);
    assert_eq!(drain(&mut index.iterator(RangeFilter::unbounded())), vec![1, 2]);
}

#[test]
fn fields_are_independent() {
    let mut keyspace = Keyspace::new();
    let mut price = NumericIndex::open(&mut keyspace, "products", "price", IndexConfig::default());
    let mut stock = NumericIndex::open(&mut keyspace, "products", "stock", IndexConfig::default());
    price.add(1, 10.0).unwrap();
    stock.add(2, 10.0).unwrap();

    assert_eq!(drain(&mut price.iterator(RangeFilter::unbounded())), vec![1]);
    assert_eq!(drain(&mut stock.iterator(RangeFilter::unbounded())), vec![2]);
    assert_eq!(keyspace.key_type("num:products/price"), Some(KeyType::ZSet));
    assert_eq!(keyspace.key_type("num:products/stock"), Some(KeyType::ZSet));
}

#[test]
fn reopened_index_shares_store() {
    let mut keyspace = Keyspace::new();
    let mut writer = open(&mut keyspace, IndexConfig::default());
    writer.add(3, 3.0).unwrap();

    let reader = open(&mut keyspace, IndexConfig::default());
    assert_eq!(drain(&mut reader.iterator(RangeFilter::unbounded())), vec![3]);
    let scanned: Vec<_> = reader.store().unwrap().scan_by_score().collect();
    assert_eq!(scanned, vec![(3, 3.0)]);
}

#[test]
fn snapshot_uses_configured_tree() {
    let mut keyspace = Keyspace::new();
    let config = IndexConfig::default()
        .with_tree(TreeConfig::default().with_leaf_capacity(8))
        .with_filter_mode(FilterMode::Deferred);
    let mut index = open(&mut keyspace, config);
    for doc_id in 1..=100 {
        index.add(doc_id, doc_id as f64).unwrap();
    }
    assert!(index.tree().num_leaves() > 1);
    assert_eq!(index.iterator(RangeFilter::unbounded()).mode(), FilterMode::Deferred);
}

#[test]
fn concurrent_first_queries_build_once() {
    let mut keyspace = Keyspace::new();
    let mut index = open(&mut keyspace, IndexConfig::default());
    for doc_id in 1..=1_000 {
        index.add(doc_id, (doc_id % 10) as f64).unwrap();
    }

    let index = &index;
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move || {
                let mut it = index.iterator(RangeFilter::inclusive(3.0, 3.0));
                assert_eq!(drain(&mut it).len(), 100);
            });
        }
    });
    assert!(std::ptr::eq(index.tree(), index.snapshot().get().unwrap()));
}
