//! # Index-addressed binary trees
//!
//! A binary tree whose nodes live in a single append-only arena and link to
//! each other by position instead of by pointer.
//!
//! ## Layout
//!
//! 1. **Arena** ([`tree`]): `Vec` of `Node { payload, left, right }` records.
//!    The root is pinned at index 0, so a child slot holding 0 means "empty".
//! 2. **Ordering policy** ([`search`]): binary-search insertion on top of the
//!    arena, rejecting duplicates.
//! 3. **Views** ([`render`]): flat dump, indented print and Graphviz export,
//!    plus a bridge that runs `dot` on the export.
//!
//! ## Usage Example
//!
//! ```
//! use arbor::{render, SearchTree};
//!
//! let mut bst = SearchTree::new(0);
//! bst.extend([1, 3, 2, -10]);
//! let dot = render::render_dot(bst.tree(), &render::RenderConfig::default())?;
//! assert!(dot.starts_with("digraph my_graph {"));
//! # Ok::<(), arbor::render::RenderError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod render; // Flat, indented and DOT views
pub mod search; // Binary search insertion policy
pub mod tree; // Node arena

// Re-exports for convenience
pub use render::{RenderConfig, RenderError, View};
pub use search::SearchTree;
pub use tree::{BinaryTree, Direction, Node, NodeIndex, TreeError, Visit, ROOT, SENTINEL};
