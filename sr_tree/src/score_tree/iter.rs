/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


use super::{ScoreNode, ScoreTree};
use crate::Leaf;

/// Pre-order traversal of a [`ScoreTree`] yielding its leaves from the lowest
/// score partition to the highest.
#[derive(Debug, Clone)]
pub struct LeafDfsIterator<'tree> {
    /// Nodes left to visit. Right children are pushed first so the left one is
    /// popped first.
    stack: Vec<&'tree ScoreNode>,
}

impl<'tree> LeafDfsIterator<'tree> {
    pub fn new(tree: &'tree ScoreTree) -> Self {
        Self::from_node(tree.root())
    }

    pub fn from_node(node: &'tree ScoreNode) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(node);
        Self { stack }
    }
}

impl<'tree> Iterator for LeafDfsIterator<'tree> {
    type Item = &'tree Leaf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                ScoreNode::Leaf(leaf) => return Some(leaf),
                ScoreNode::Internal(internal) => {
                    self.stack.push(internal.right());
                    self.stack.push(internal.left());
                }
            }
        }
        None
    }
}

impl<'tree> IntoIterator for &'tree ScoreTree {
    type Item = &'tree Leaf;
    type IntoIter = LeafDfsIterator<'tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves()
    }
}
