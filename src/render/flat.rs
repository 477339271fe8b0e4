use std::fmt::Display;
use std::io::Write;

use super::{into_string, RenderError};
use crate::tree::BinaryTree;

/// Write one `Node(payload, left, right)` line per node, in storage order.
///
/// Child indices are printed raw; `0` means "no child".
pub fn write_flat<T, W>(writer: &mut W, tree: &BinaryTree<T>) -> Result<(), RenderError>
where
    T: Display,
    W: Write,
{
    tree.ensure_non_empty()?;

    for (_, node) in tree.iter() {
        writeln!(writer, "{node}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the flat view into a string (useful for tests and snapshots).
pub fn render_flat<T: Display>(tree: &BinaryTree<T>) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    write_flat(&mut buffer, tree)?;
    into_string(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Direction, ROOT};

    #[test]
    fn test_single_node() {
        let tree = BinaryTree::new(7);
        assert_eq!(render_flat(&tree).unwrap(), "Node(7, 0, 0)\n");
    }

    #[test]
    fn test_lists_orphans_too() {
        let mut tree = BinaryTree::new(1);
        tree.insert(ROOT, Direction::Left, 2).unwrap();
        tree.insert(ROOT, Direction::Left, 3).unwrap();

        let flat = render_flat(&tree).unwrap();
        assert_eq!(flat, "Node(1, 2, 0)\nNode(2, 0, 0)\nNode(3, 0, 0)\n");
    }
}
