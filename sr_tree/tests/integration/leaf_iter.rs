/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Tests for [`LeafIterator`].

use pretty_assertions::assert_eq;
use sr_tree::{DocEntry, DocIdTree, LeafIterator};

fn tree_from(ids: &[u64]) -> DocIdTree {
    let mut tree = DocIdTree::new();
    for &id in ids {
        tree.insert(id, id as f64 * 10.0);
    }
    tree
}

#[test]
fn yields_ascending_doc_ids() {
    let tree = tree_from(&[50, 20, 80, 10, 30, 70, 90, 25]);
    let ids: Vec<_> = tree.iter().map(|entry| entry.doc_id).collect();
    assert_eq!(ids, vec![10, 20, 25, 30, 50, 70, 80, 90]);
}

#[test]
fn current_tracks_last_entry() {
    let tree = tree_from(&[2, 1]);
    let mut it = LeafIterator::new(&tree);
    assert_eq!(it.current(), None);
    assert_eq!(it.next(), Some(DocEntry::new(1, 10.0)));
    assert_eq!(it.current(), Some(DocEntry::new(1, 10.0)));
    assert_eq!(it.next(), Some(DocEntry::new(2, 20.0)));
    assert_eq!(it.next(), None);
    assert_eq!(it.current(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn interleaved_iterators_are_independent() {
    let tree = tree_from(&[3, 1, 2, 5, 4]);
    let mut first = tree.iter();
    let mut second = tree.iter();

    assert_eq!(first.next().map(|e| e.doc_id), Some(1));
    assert_eq!(first.next().map(|e| e.doc_id), Some(2));
    assert_eq!(second.next().map(|e| e.doc_id), Some(1));
    assert_eq!(first.next().map(|e| e.doc_id), Some(3));
    assert_eq!(second.next().map(|e| e.doc_id), Some(2));

    let rest: Vec<_> = first.map(|e| e.doc_id).collect();
    assert_eq!(rest, vec![4, 5]);
    assert_eq!(second.count(), 3);
}

#[test]
fn long_degenerate_tree() {
    let ids: Vec<u64> = (0..5_000).rev().collect();
    let tree = tree_from(&ids);
    assert!(tree.iter().map(|e| e.doc_id).eq(0..5_000));
}
