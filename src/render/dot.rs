use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;

use super::{into_string, RenderConfig, RenderError};
use crate::tree::{BinaryTree, Direction};

/// Write the tree as a Graphviz `digraph`.
///
/// Every arena entry `i` is declared as `node_<i>` labelled with its payload
/// and gets exactly two out-edges. A real child edge is labelled with the
/// child's index; an empty slot gets a point-shaped `null_left_<i>` or
/// `null_right_<i>` node instead. Orphaned entries are emitted too.
pub fn write_dot<T, W>(
    writer: &mut W,
    tree: &BinaryTree<T>,
    config: &RenderConfig,
) -> Result<(), RenderError>
where
    T: Display,
    W: Write,
{
    tree.ensure_non_empty()?;

    writeln!(writer, "digraph {} {{", dot_id(&config.graph_name))?;
    for (index, node) in tree.iter() {
        let label = node.payload.to_string();
        writeln!(writer, "  node_{index}[label={}];", dot_id(&label))?;

        for direction in [Direction::Left, Direction::Right] {
            match node.child(direction) {
                Some(child) => {
                    writeln!(writer, "  node_{index} -> node_{child}[label={child}];")?;
                }
                None => {
                    let null = format!("null_{direction}_{index}");
                    writeln!(writer, "  {null}[shape=point];")?;
                    writeln!(writer, "  node_{index} -> {null};")?;
                }
            }
        }
    }
    writeln!(writer, "}}")?;

    writer.flush()?;
    Ok(())
}

/// Render the DOT description into a string.
pub fn render_dot<T: Display>(
    tree: &BinaryTree<T>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    write_dot(&mut buffer, tree, config)?;
    into_string(buffer)
}

/// Bare identifiers and numerals pass through; anything else is quoted.
fn dot_id(text: &str) -> Cow<'_, str> {
    if is_bare_id(text) || is_numeral(text) {
        Cow::Borrowed(text)
    } else {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n");
        Cow::Owned(format!("\"{escaped}\""))
    }
}

fn is_bare_id(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_numeral(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => {
            !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
        }
    }
}
