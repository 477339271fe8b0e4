//! End-to-end scenarios with golden output

mod common;

use arbor::render::{render_dot, render_flat, render_indented, RenderConfig};
use arbor::{BinaryTree, Node};
use common::{assert_snapshot, directional_tree, search_tree};

#[test]
fn directional_inserts_layout() {
    let tree = directional_tree();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.nodes()[0], Node { payload: 1, left: 2, right: 1 });
    assert_eq!(tree.nodes()[1], Node::leaf(4));
    assert_eq!(tree.nodes()[2], Node { payload: 2, left: 0, right: 3 });
    assert_eq!(tree.nodes()[3], Node::leaf(3));
}

#[test]
fn directional_inserts_views() {
    let tree = directional_tree();
    let config = RenderConfig::default();

    assert_snapshot("directional_flat.txt", &render_flat(&tree).unwrap());
    assert_snapshot("directional_tree.txt", &render_indented(&tree, &config).unwrap());
    assert_snapshot("directional_dot.txt", &render_dot(&tree, &config).unwrap());
}

#[test]
fn search_sequence_views() {
    let bst = search_tree();
    let config = RenderConfig::default();

    // Seven values, one of them equal to the root
    assert_eq!(bst.len(), 7);
    assert_snapshot("search_flat.txt", &render_flat(bst.tree()).unwrap());
    assert_snapshot("search_tree.txt", &render_indented(bst.tree(), &config).unwrap());
}

#[test]
fn search_sequence_final_index_of_last_value() {
    let mut bst = search_tree();
    // -5 went below -10's right slot, so it is the newest node
    assert_eq!(bst.find(&-5), Some(6));
    assert_eq!(bst.insert(-5), 6);
}

#[test]
fn single_node_dot_export() {
    let tree = BinaryTree::new(7);
    let dot = render_dot(&tree, &RenderConfig::default()).unwrap();
    assert_snapshot("single_node_dot.txt", &dot);
}
