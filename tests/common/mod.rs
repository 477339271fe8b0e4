#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use arbor::{BinaryTree, Direction, SearchTree, ROOT};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("ARBOR_UPDATE_SNAPSHOTS").is_ok() {
        fs::create_dir_all(snapshot_root()).expect("create snapshot directory");
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set ARBOR_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path, expected, actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Root 1, right 4, left 2, and 3 as the right child of 2.
pub fn directional_tree() -> BinaryTree<i64> {
    let mut tree = BinaryTree::new(1);
    tree.insert(ROOT, Direction::Right, 4).expect("root exists");
    let left = tree.insert(ROOT, Direction::Left, 2).expect("root exists");
    tree.insert(left, Direction::Right, 3).expect("left child exists");
    tree
}

/// Search tree rooted at 0 fed a mixed sequence with one duplicate.
pub fn search_tree() -> SearchTree<i64> {
    let mut bst = SearchTree::new(0);
    bst.extend([1, 3, 2, 0, -10, 4, -5]);
    bst
}
