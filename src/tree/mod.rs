//! Index-addressed binary tree arena
//!
//! All nodes live in one `Vec`, linked by position rather than by pointer.
//! Growth only appends, so indices handed out stay valid for the lifetime of
//! the tree.
//!
//! The root is created with the tree and pinned at index 0. Because
//! insertion never links a node to index 0, the value 0 in a child slot
//! unambiguously means "no child" (see [`SENTINEL`]).
//!
//! Node removal would break this encoding; switch to `Option<NodeIndex>`
//! slots before adding it.

mod node;
mod traversal;

pub use node::{Direction, Node, NodeIndex, SENTINEL};
pub use traversal::{DepthFirst, Visit};

use thiserror::Error;
use tracing::{trace, warn};

/// Index of the root node in every tree
pub const ROOT: NodeIndex = 0;

/// Errors raised at the arena boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Index does not name a node in the arena
    #[error("invalid node index {index} (tree has {len} nodes)")]
    InvalidIndex {
        /// Offending index
        index: NodeIndex,
        /// Arena length at the time of the call
        len: usize,
    },

    /// Operation needs at least the root node
    #[error("tree has no nodes")]
    EmptyTree,

    /// Raw records link one node from two slots
    #[error("node {index} is linked as a child more than once")]
    SharedChild {
        /// Node referenced twice
        index: NodeIndex,
    },

    /// Raw records link a node to itself or to an earlier node
    #[error("node {parent} links back to node {index}")]
    BackwardLink {
        /// Node owning the link
        parent: NodeIndex,
        /// Link target, not after `parent`
        index: NodeIndex,
    },
}

/// Binary tree stored as an append-only arena
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryTree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> BinaryTree<T> {
    /// Create a tree holding only the root
    pub fn new(payload: T) -> Self {
        Self {
            nodes: vec![Node::leaf(payload)],
        }
    }

    /// Rebuild a tree from raw records
    ///
    /// Rejects an empty record list, out-of-range links, links that do not
    /// point strictly forward and nodes linked from more than one slot.
    /// Forward-only links keep the arena acyclic, as appending does.
    /// Unlinked nodes are accepted: overwriting a slot leaves exactly such
    /// orphans behind.
    pub fn from_nodes(nodes: Vec<Node<T>>) -> Result<Self, TreeError> {
        if nodes.is_empty() {
            return Err(TreeError::EmptyTree);
        }

        let len = nodes.len();
        let mut linked = vec![false; len];
        for (parent, node) in nodes.iter().enumerate() {
            for direction in [Direction::Left, Direction::Right] {
                let Some(index) = node.child(direction) else {
                    continue;
                };
                if index >= len {
                    return Err(TreeError::InvalidIndex { index, len });
                }
                if index <= parent {
                    return Err(TreeError::BackwardLink { parent, index });
                }
                if linked[index] {
                    return Err(TreeError::SharedChild { index });
                }
                linked[index] = true;
            }
        }

        Ok(Self { nodes })
    }

    /// Append `payload` and link it as the `direction` child of `parent`
    ///
    /// An occupied slot is overwritten and the subtree it held becomes
    /// unreachable. Nodes are never removed, so the orphans stay in storage.
    pub fn insert(
        &mut self,
        parent: NodeIndex,
        direction: Direction,
        payload: T,
    ) -> Result<NodeIndex, TreeError> {
        self.check_index(parent)?;
        Ok(self.attach(parent, direction, payload))
    }

    /// [`insert`](Self::insert) for a parent already known to exist
    pub(crate) fn attach(
        &mut self,
        parent: NodeIndex,
        direction: Direction,
        payload: T,
    ) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::leaf(payload));

        let slot = &mut self.nodes[parent];
        if let Some(previous) = slot.child(direction) {
            warn!(parent, %direction, previous, "overwriting occupied child slot");
        }
        slot.set_slot(direction, index);

        trace!(parent, %direction, index, "inserted node");
        index
    }

    /// Number of nodes in storage, reachable or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`, if any
    pub fn get(&self, index: NodeIndex) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    /// Node at `index`, or [`TreeError::InvalidIndex`]
    pub fn node(&self, index: NodeIndex) -> Result<&Node<T>, TreeError> {
        self.nodes.get(index).ok_or(TreeError::InvalidIndex {
            index,
            len: self.nodes.len(),
        })
    }

    /// Root node, or [`TreeError::EmptyTree`]
    pub fn root(&self) -> Result<&Node<T>, TreeError> {
        self.nodes.first().ok_or(TreeError::EmptyTree)
    }

    /// Child of `index` in `direction`, `None` for an empty slot
    pub fn child(
        &self,
        index: NodeIndex,
        direction: Direction,
    ) -> Result<Option<NodeIndex>, TreeError> {
        Ok(self.node(index)?.child(direction))
    }

    /// All records in storage order
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Storage-order dump: `(index, node)` from 0 to `len - 1`
    ///
    /// Raw physical layout, independent of tree shape.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node<T>)> + '_ {
        self.nodes.iter().enumerate()
    }

    /// Pre-order walk starting at `start`
    pub fn depth_first(&self, start: NodeIndex) -> Result<DepthFirst<'_, T>, TreeError> {
        self.check_index(start)?;
        Ok(DepthFirst::new(self, start))
    }

    /// Pre-order walk starting at the root
    pub fn depth_first_from_root(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self, ROOT)
    }

    /// Fail with [`TreeError::EmptyTree`] when there is no root
    pub fn ensure_non_empty(&self) -> Result<(), TreeError> {
        self.root().map(|_| ())
    }

    fn check_index(&self, index: NodeIndex) -> Result<(), TreeError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::InvalidIndex {
                index,
                len: self.nodes.len(),
            })
        }
    }
}
