//! Arena node record
//!
//! A node is a payload plus two child indices into the owning arena.
//! Index 0 is the root, which no node can ever point at, so 0 doubles
//! as the "no child" marker.

use std::fmt;

/// Position of a node inside its arena
pub type NodeIndex = usize;

/// Child index meaning "no child"
pub const SENTINEL: NodeIndex = 0;

/// Which child slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Left child slot
    Left,

    /// Right child slot
    Right,
}

impl Direction {
    /// Lowercase name, as used in placeholder lines and CLI ops
    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One record in the arena
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<T> {
    /// Stored value
    pub payload: T,

    /// Index of the left child, or [`SENTINEL`]
    pub left: NodeIndex,

    /// Index of the right child, or [`SENTINEL`]
    pub right: NodeIndex,
}

impl<T> Node<T> {
    /// Create a childless node
    pub fn leaf(payload: T) -> Self {
        Self {
            payload,
            left: SENTINEL,
            right: SENTINEL,
        }
    }

    /// Raw slot value for `direction` (may be the sentinel)
    #[inline]
    pub fn slot(&self, direction: Direction) -> NodeIndex {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Child index in `direction`, `None` when the slot is empty
    #[inline]
    pub fn child(&self, direction: Direction) -> Option<NodeIndex> {
        match self.slot(direction) {
            SENTINEL => None,
            index => Some(index),
        }
    }

    pub(crate) fn set_slot(&mut self, direction: Direction, index: NodeIndex) {
        match direction {
            Direction::Left => self.left = index,
            Direction::Right => self.right = index,
        }
    }

    /// Check if both slots are empty
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == SENTINEL && self.right == SENTINEL
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}, {}, {})", self.payload, self.left, self.right)
    }
}
