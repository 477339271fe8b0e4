//! Binary search tree on top of the arena
//!
//! Insertion walks down from a start node comparing payloads, and attaches
//! the new value to the first empty slot on its path. No rebalancing:
//! sorted input produces a chain.

use std::cmp::Ordering;

use tracing::debug;

use crate::tree::{BinaryTree, Direction, NodeIndex, TreeError, ROOT};

/// Unbalanced, append-only binary search tree
///
/// Every payload in a node's left subtree compares less than the node,
/// every payload in its right subtree compares greater. Equal payloads are
/// never stored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T: Ord> SearchTree<T> {
    /// Create a search tree whose root holds `payload`
    pub fn new(payload: T) -> Self {
        Self {
            tree: BinaryTree::new(payload),
        }
    }

    /// Insert `payload` starting the walk at the root
    ///
    /// Returns the index of the new node, or of the existing node holding an
    /// equal payload.
    pub fn insert(&mut self, payload: T) -> NodeIndex {
        self.descend(payload, ROOT)
    }

    /// Insert `payload` starting the walk at `start`
    ///
    /// Starting below the root can break the ordering of the whole tree;
    /// that is the caller's responsibility.
    pub fn insert_from(&mut self, payload: T, start: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.tree.node(start)?;
        Ok(self.descend(payload, start))
    }

    fn descend(&mut self, payload: T, start: NodeIndex) -> NodeIndex {
        let mut current = start;
        loop {
            let node = &self.tree.nodes()[current];
            let direction = match payload.cmp(&node.payload) {
                Ordering::Equal => {
                    debug!(index = current, "duplicate payload, nothing inserted");
                    return current;
                }
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };

            match node.child(direction) {
                Some(next) => current = next,
                None => return self.tree.attach(current, direction, payload),
            }
        }
    }

    /// Index of the node holding `payload`, if present
    pub fn find(&self, payload: &T) -> Option<NodeIndex> {
        let mut current = ROOT;
        loop {
            let node = self.tree.get(current)?;
            let direction = match payload.cmp(&node.payload) {
                Ordering::Equal => return Some(current),
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            current = node.child(direction)?;
        }
    }

    /// Check if `payload` is stored
    pub fn contains(&self, payload: &T) -> bool {
        self.find(payload).is_some()
    }
}

impl<T> SearchTree<T> {
    /// Underlying arena (read-only)
    pub fn tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Give up the ordering policy and keep the arena
    pub fn into_tree(self) -> BinaryTree<T> {
        self.tree
    }

    /// Number of stored nodes
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Always false: the root exists from construction
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.insert(payload);
        }
    }
}
