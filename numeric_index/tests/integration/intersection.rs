/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! A numeric range stream intersected with another index stream.

use index_iterators::{IdList, IndexIterator, IndexResult, Intersection, ResultData};
use numeric_index::{FilterMode, NumericRangeIterator, RangeFilter};
use pretty_assertions::assert_eq;

use crate::helpers::{drain, modulo_tree};

#[test]
fn numeric_and_id_list() {
    let tree = modulo_tree(1_000, 32);
    let numeric = NumericRangeIterator::new(&tree, RangeFilter::inclusive(0.0, 9.0), FilterMode::Exact);
    // Stand-in for a text posting list: every seventh document.
    let postings = IdList::new((7..=1_000).step_by(7).collect());

    let children: Vec<Box<dyn IndexIterator + '_>> = vec![Box::new(numeric), Box::new(postings)];
    let mut it = Intersection::new(children);

    let expected: Vec<u64> = (1..=1_000u64)
        .filter(|doc_id| doc_id % 100 <= 9 && doc_id % 7 == 0)
        .collect();
    assert_eq!(drain(&mut it), expected);
}

#[test]
fn aggregate_carries_numeric_value() {
    let tree = modulo_tree(300, 16);
    let numeric = NumericRangeIterator::new(&tree, RangeFilter::inclusive(42.0, 42.0), FilterMode::Exact);
    let postings = IdList::new(vec![142, 242]);

    let children: Vec<Box<dyn IndexIterator + '_>> = vec![Box::new(numeric), Box::new(postings)];
    let mut it = Intersection::new(children);

    let result = it.read().unwrap();
    assert_eq!(result.doc_id, 142);
    let children = result.children().unwrap();
    assert!(children.contains(&IndexResult {
        doc_id: 142,
        ..IndexResult::numeric(42.0)
    }));
    assert!(children.iter().any(|child| child.data == ResultData::Virtual));

    assert_eq!(it.read().map(|r| r.doc_id), Some(242));
    assert!(it.read().is_none());
}
