/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! In-order traversal of a [`DocIdTree`].

use crate::doc_tree::{DocEntry, DocIdTree, DocNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    DescendLeft,
    VisitSelf,
    DescendRight,
    Pop,
}

#[derive(Debug, Clone, Copy)]
struct Frame<'tree> {
    node: &'tree DocNode,
    phase: Phase,
}

impl<'tree> Frame<'tree> {
    const fn new(node: &'tree DocNode) -> Self {
        Self {
            node,
            phase: Phase::DescendLeft,
        }
    }
}

/// Yields the entries of a [`DocIdTree`] in ascending document id order.
///
/// The traversal state lives in an explicit stack owned by the iterator, so
/// the tree is only borrowed immutably and any number of iterators can walk
/// the same tree in an interleaved fashion.
#[derive(Debug, Clone)]
pub struct LeafIterator<'tree> {
    stack: Vec<Frame<'tree>>,
    current: Option<DocEntry>,
}

impl<'tree> LeafIterator<'tree> {
    const INITIAL_STACK_CAPACITY: usize = 8;

    pub fn new(tree: &'tree DocIdTree) -> Self {
        let mut stack = Vec::with_capacity(Self::INITIAL_STACK_CAPACITY);
        stack.extend(tree.root().map(Frame::new));
        Self {
            stack,
            current: None,
        }
    }

    /// The entry returned by the last call to [`next`](Iterator::next), or
    /// `None` before the first call and after exhaustion.
    pub const fn current(&self) -> Option<DocEntry> {
        self.current
    }

    fn step(&mut self) -> Option<DocEntry> {
        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            match frame.phase {
                Phase::DescendLeft => {
                    frame.phase = Phase::VisitSelf;
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Frame::new(left));
                    }
                }
                Phase::VisitSelf => {
                    frame.phase = Phase::DescendRight;
                    return Some(node.entry);
                }
                Phase::DescendRight => {
                    frame.phase = Phase::Pop;
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Frame::new(right));
                    }
                }
                Phase::Pop => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl Iterator for LeafIterator<'_> {
    type Item = DocEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.step();
        self.current
    }
}

impl std::iter::FusedIterator for LeafIterator<'_> {}
