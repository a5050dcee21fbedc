//! The public B-tree handle.
//!
//! [`BTree`] owns the root node and the bookkeeping the node-level
//! algorithms cannot do for themselves: pre-splitting a full root before an
//! insert descends (the root has no parent to split it preemptively) and
//! collapsing an empty root after a delete (height shrink).

use crate::common::config::Branching;
use crate::common::{Error, Result};
use crate::index::btree::entry::Entry;
use crate::index::btree::node::{Node, RemoveTarget};
use crate::index::btree::stats::TreeStats;

/// An in-memory ordered key/value index over byte-sequence keys.
///
/// Keys are compared byte-wise lexicographically; both keys and values may
/// be empty. Point lookup, insert-or-update, and delete all run in a single
/// top-down pass in `O(t · log_t(n))` time.
///
/// # Usage
/// ```
/// use bytetree::BTree;
///
/// let mut tree = BTree::new();
/// assert!(tree.insert(b"key", b"v1"));   // new key
/// assert!(!tree.insert(b"key", b"v2"));  // update, last write wins
/// assert_eq!(tree.find(b"key").unwrap(), b"v2");
/// assert!(tree.delete(b"key"));
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct BTree {
    /// The root node; `None` for an empty tree. Every other node is
    /// reachable only through parent-to-child ownership.
    root: Option<Box<Node>>,

    /// Capacity parameters, fixed at construction.
    branching: Branching,

    /// Number of live entries.
    len: usize,

    /// Operation counters.
    stats: TreeStats,
}

impl BTree {
    /// Create an empty tree with the default branching factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with branching factor `t`.
    ///
    /// # Panics
    /// Panics if `t < 2`.
    pub fn with_degree(degree: usize) -> Self {
        Self {
            root: None,
            branching: Branching::new(degree),
            len: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Find
    // ========================================================================

    /// Look up `key`, returning a borrow of its value.
    ///
    /// Walks top-down from the root; each level either hits the key
    /// exactly or narrows to the one child subtree that could contain it.
    ///
    /// # Errors
    /// - `Error::KeyNotFound` if the key is absent (including on an empty
    ///   tree, and for an empty-sequence key that was never inserted)
    pub fn find(&self, key: &[u8]) -> Result<&[u8]> {
        let mut next = self.root.as_deref();

        while let Some(node) = next {
            let (pos, found) = node.search(key);
            if found {
                return Ok(node.entries[pos].value.as_slice());
            }
            next = node.children.get(pos).map(Box::as_ref);
        }

        Err(Error::KeyNotFound)
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `key` → `value`, overwriting any existing value for the key.
    ///
    /// Returns `true` if the key was new, `false` if this was an update.
    /// Insertion cannot fail: capacity is unbounded via node splitting.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> bool {
        let entry = Entry::new(key, value);

        let Some(root) = self.root.as_mut() else {
            self.root = Some(Box::new(Node::leaf_with(entry)));
            self.len = 1;
            self.stats.inserts += 1;
            return true;
        };

        // The root is the one node no parent can pre-split; grow a level
        // here before delegating so the downward pass always finds room.
        if root.is_full(self.branching) {
            let old_root = std::mem::replace(root.as_mut(), Node::new());
            root.children.push(Box::new(old_root));
            root.split_child(0, self.branching);
            self.stats.root_splits += 1;
        }

        let was_new = root.insert(entry, self.branching);
        if was_new {
            self.len += 1;
            self.stats.inserts += 1;
        } else {
            self.stats.updates += 1;
        }
        was_new
    }

    // ========================================================================
    // Public API: Delete
    // ========================================================================

    /// Delete `key`, returning whether an entry was removed.
    ///
    /// Deleting from an empty tree or a key that is not present is a
    /// normal no-op reported as `false`, never an error.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        let removed = match self.root.as_mut() {
            Some(root) => root
                .remove(RemoveTarget::Key(key), self.branching)
                .is_some(),
            None => return false,
        };

        if removed {
            self.len -= 1;
            self.stats.removals += 1;
        }

        // An empty internal root hands the tree to its sole child (height
        // shrink); an empty leaf root means the tree is now empty.
        let root_drained = self.root.as_ref().is_some_and(|r| r.entries.is_empty());
        if root_drained {
            if let Some(mut root) = self.root.take() {
                self.root = if root.is_leaf() {
                    None
                } else {
                    Some(root.children.remove(0))
                };
                self.stats.root_collapses += 1;
            }
        }

        removed
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree; 0 for an empty tree.
    ///
    /// Every leaf sits at the same depth, so walking the leftmost spine
    /// measures the whole tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut next = self.root.as_deref();
        while let Some(node) = next {
            height += 1;
            next = node.children.first().map(Box::as_ref);
        }
        height
    }

    /// The branching factor `t` this tree was built with.
    pub fn degree(&self) -> usize {
        self.branching.degree()
    }

    /// A copy of the operation counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    // ========================================================================
    // Internal: test access
    // ========================================================================

    /// The root node, for structural checks in tests.
    #[cfg(test)]
    pub(crate) fn root_for_tests(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Capacity parameters, for structural checks in tests.
    #[cfg(test)]
    pub(crate) fn branching_for_tests(&self) -> Branching {
        self.branching
    }
}
