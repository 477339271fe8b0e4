use std::fmt::Display;
use std::io::Write;

use super::{into_string, RenderConfig, RenderError};
use crate::tree::{BinaryTree, Direction, Visit};

/// Write the tree as an indented pre-order listing from the root.
///
/// Each level adds `config.indent_width` spaces. An empty child slot prints
/// `No left child` or `No right child` one level below its parent.
pub fn write_indented<T, W>(
    writer: &mut W,
    tree: &BinaryTree<T>,
    config: &RenderConfig,
) -> Result<(), RenderError>
where
    T: Display,
    W: Write,
{
    tree.ensure_non_empty()?;

    for visit in tree.depth_first_from_root() {
        let pad = padding(visit.depth(), config.indent_width);
        match visit {
            Visit::Node { index, .. } => {
                let node = tree.node(index)?;
                writeln!(writer, "{:pad$}{node}", "")?;
            }
            Visit::Missing { direction, .. } => {
                writeln!(writer, "{:pad$}{}", "", placeholder(direction))?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Leading spaces for a line at `depth`, clamped instead of overflowing
fn padding(depth: usize, indent_width: usize) -> usize {
    depth.saturating_mul(indent_width)
}

fn placeholder(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "No left child",
        Direction::Right => "No right child",
    }
}

/// Render the indented view into a string.
pub fn render_indented<T: Display>(
    tree: &BinaryTree<T>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    write_indented(&mut buffer, tree, config)?;
    into_string(buffer)
}
