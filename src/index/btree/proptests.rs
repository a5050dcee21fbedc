use super::node::Node;
use super::tree::BTree;
use crate::common::config::Branching;
use crate::common::Error;

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Walk the whole tree and assert every structural invariant:
/// - global strict key ordering (each subtree strictly between its bounds)
/// - per-node capacity: `entries <= max_items`, non-root `entries >= min_items`
/// - child pairing: `children` is empty or exactly `entries + 1`
/// - every leaf at the same depth
/// - entry count matches `BTree::len`
fn validate_tree(tree: &BTree) {
    let branching = tree.branching_for_tests();
    let mut count = 0usize;
    let mut leaf_depths: Vec<usize> = Vec::new();

    if let Some(root) = tree.root_for_tests() {
        assert!(
            !root.entries.is_empty(),
            "a live root must hold at least one entry"
        );
        validate_node(
            root,
            branching,
            true,
            None,
            None,
            0,
            &mut count,
            &mut leaf_depths,
        );
    }

    assert_eq!(count, tree.len(), "reachable entry count must match len");
    if let Some(&first) = leaf_depths.first() {
        assert!(
            leaf_depths.iter().all(|&d| d == first),
            "all leaves must sit at the same depth"
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn validate_node(
    node: &Node,
    branching: Branching,
    is_root: bool,
    lower: Option<&[u8]>,
    upper: Option<&[u8]>,
    depth: usize,
    count: &mut usize,
    leaf_depths: &mut Vec<usize>,
) {
    assert!(
        node.entries.len() <= branching.max_items(),
        "node exceeds max_items"
    );
    if !is_root {
        assert!(
            node.entries.len() >= branching.min_items(),
            "non-root node below min_items"
        );
    }

    if node.is_leaf() {
        leaf_depths.push(depth);
    } else {
        assert_eq!(
            node.children.len(),
            node.entries.len() + 1,
            "internal node must pair children with entries"
        );
        assert!(node.children.len() <= branching.max_children());
    }

    *count += node.entries.len();

    for pair in node.entries.windows(2) {
        assert!(pair[0].key < pair[1].key, "entries must strictly increase");
    }
    if let (Some(low), Some(first)) = (lower, node.entries.first()) {
        assert!(first.key.as_slice() > low, "entry at or below lower bound");
    }
    if let (Some(high), Some(last)) = (upper, node.entries.last()) {
        assert!(last.key.as_slice() < high, "entry at or above upper bound");
    }

    for (i, child) in node.children.iter().enumerate() {
        let child_lower = if i == 0 {
            lower
        } else {
            Some(node.entries[i - 1].key.as_slice())
        };
        let child_upper = if i == node.entries.len() {
            upper
        } else {
            Some(node.entries[i].key.as_slice())
        };
        validate_node(
            child,
            branching,
            false,
            child_lower,
            child_upper,
            depth + 1,
            count,
            leaf_depths,
        );
    }
}

/// In-order traversal of all entries, for comparison against the model.
fn collect(tree: &BTree) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut out = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root_for_tests() {
        collect_node(root, &mut out);
    }
    out
}

fn collect_node(node: &Node, out: &mut Vec<(Vec<u8>, Vec<u8>)>) {
    for (i, entry) in node.entries.iter().enumerate() {
        if let Some(child) = node.children.get(i) {
            collect_node(child, out);
        }
        out.push((entry.key.clone(), entry.value.clone()));
    }
    if let Some(last) = node.children.last() {
        collect_node(last, out);
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
    Find(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // Short keys from a small alphabet so inserts, updates and deletes
    // collide often enough to exercise every rebalancing path.
    prop::collection::vec(0u8..8, 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let value = prop::collection::vec(any::<u8>(), 0..=4);
    let op = prop_oneof![
        5 => (key.clone(), value).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => key.clone().prop_map(Op::Delete),
        2 => key.prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_matches_btreemap_model(degree in 2usize..6, ops in ops_strategy()) {
        let mut tree = BTree::with_degree(degree);
        let mut model: BTreeMap<Vec<u8>, Vec<u8>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let was_new = tree.insert(&key, &value);
                    let old = model.insert(key, value);
                    prop_assert_eq!(was_new, old.is_none());
                }
                Op::Delete(key) => {
                    let removed = tree.delete(&key);
                    let old = model.remove(key.as_slice());
                    prop_assert_eq!(removed, old.is_some());
                }
                Op::Find(key) => {
                    let got = tree.find(&key).ok();
                    let expected = model.get(key.as_slice()).map(Vec::as_slice);
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(tree.len(), model.len());
            validate_tree(&tree);
        }

        // The surviving contents agree entry-for-entry, in key order.
        let got = collect(&tree);
        let expected: Vec<(Vec<u8>, Vec<u8>)> =
            model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_find_after_insert(key in key_strategy(), value in prop::collection::vec(any::<u8>(), 0..=8)) {
        let mut tree = BTree::new();
        tree.insert(&key, &value);
        prop_assert_eq!(tree.find(&key), Ok(value.as_slice()));
    }

    #[test]
    fn prop_delete_makes_key_unfindable(keys in prop::collection::btree_set(key_strategy(), 1..40)) {
        let mut tree = BTree::new();
        for key in &keys {
            tree.insert(key, b"v");
        }

        for key in &keys {
            prop_assert!(tree.delete(key));
            prop_assert_eq!(tree.find(key), Err(Error::KeyNotFound));
            validate_tree(&tree);
        }
        prop_assert!(tree.is_empty());
    }
}
