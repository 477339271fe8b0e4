//! Depth-first (pre-order) traversal
//!
//! Walks root, left subtree, right subtree. Empty child slots are reported
//! as [`Visit::Missing`] instead of being skipped, so consumers that print
//! placeholders see every slot exactly once.
//!
//! Uses an explicit stack: a tree built from sorted input degenerates into
//! a chain as deep as the arena is long.

use super::{BinaryTree, Direction, Node, NodeIndex};

/// One step of a depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// A real node
    Node {
        /// Arena index of the node
        index: NodeIndex,
        /// Distance from the starting node
        depth: usize,
    },

    /// An empty child slot
    Missing {
        /// Node owning the empty slot
        parent: NodeIndex,
        /// Which slot is empty
        direction: Direction,
        /// Depth the child would have had
        depth: usize,
    },
}

impl Visit {
    /// Depth of this step relative to the start
    pub fn depth(&self) -> usize {
        match *self {
            Visit::Node { depth, .. } | Visit::Missing { depth, .. } => depth,
        }
    }
}

/// Pre-order iterator over a [`BinaryTree`]
#[derive(Debug)]
pub struct DepthFirst<'a, T> {
    nodes: &'a [Node<T>],
    stack: Vec<Visit>,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(super) fn new(tree: &'a BinaryTree<T>, start: NodeIndex) -> Self {
        Self {
            nodes: tree.nodes(),
            stack: vec![Visit::Node {
                index: start,
                depth: 0,
            }],
        }
    }

    fn push_slot(&mut self, parent: NodeIndex, direction: Direction, depth: usize) {
        let visit = match self.nodes[parent].child(direction) {
            Some(index) => Visit::Node { index, depth },
            None => Visit::Missing {
                parent,
                direction,
                depth,
            },
        };
        self.stack.push(visit);
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = self.stack.pop()?;
        if let Visit::Node { index, depth } = visit {
            // Right first so left is popped first
            self.push_slot(index, Direction::Right, depth + 1);
            self.push_slot(index, Direction::Left, depth + 1);
        }
        Some(visit)
    }
}
