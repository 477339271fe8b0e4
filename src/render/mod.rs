//! Read-only views over a tree
//!
//! Three independent renderings, each writing to any [`io::Write`] sink:
//! - flat: one line per node in storage order
//! - indented: pre-order print with explicit empty-slot placeholders
//! - dot: Graphviz description, every node with exactly two out-edges
//!
//! Each `write_*` has a `render_*` twin returning a `String`.

mod dot;
mod flat;
mod indented;
pub mod graphviz;

pub use dot::{render_dot, write_dot};
pub use flat::{render_flat, write_flat};
pub use indented::{render_indented, write_indented};

use std::io;

use thiserror::Error;

use crate::tree::TreeError;

/// Graph name used by the DOT export unless overridden
pub const DEFAULT_GRAPH_NAME: &str = "my_graph";

/// Spaces per nesting level in the indented view unless overridden
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Errors raised while producing a view
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tree precondition failed
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Writing to the sink failed
    #[error("failed to write view: {0}")]
    Io(#[from] io::Error),

    /// External renderer exited unsuccessfully
    #[error("{program} exited with {status}")]
    Renderer {
        /// Program that was run
        program: String,
        /// Its exit status
        status: std::process::ExitStatus,
    },
}

/// Formatting knobs shared by the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per level in the indented view
    pub indent_width: usize,

    /// Name of the `digraph` block in the DOT export
    pub graph_name: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl RenderConfig {
    /// Set spaces per indentation level
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Set the DOT graph name
    pub fn with_graph_name(mut self, graph_name: impl Into<String>) -> Self {
        self.graph_name = graph_name.into();
        self
    }
}

/// Which view to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Storage-order dump
    Flat,
    /// Indented pre-order print
    Indented,
    /// Graphviz description
    Dot,
}

/// Write the selected `view` of `tree`
pub fn write_view<T, W>(
    writer: &mut W,
    tree: &crate::tree::BinaryTree<T>,
    view: View,
    config: &RenderConfig,
) -> Result<(), RenderError>
where
    T: std::fmt::Display,
    W: io::Write,
{
    match view {
        View::Flat => write_flat(writer, tree),
        View::Indented => write_indented(writer, tree, config),
        View::Dot => write_dot(writer, tree, config),
    }
}

fn into_string(buffer: Vec<u8>) -> Result<String, RenderError> {
    String::from_utf8(buffer)
        .map_err(|err| RenderError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
