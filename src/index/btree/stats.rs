//! Tree operation statistics.

use std::fmt;

/// Counters tracked by the tree handle.
///
/// Plain `u64` fields: every mutating tree operation already takes
/// `&mut self`, so there is nothing to synchronize. Reading the stats
/// copies the whole struct out.
///
/// # Example
/// ```
/// use bytetree::BTree;
///
/// let mut tree = BTree::new();
/// tree.insert(b"k", b"v1");
/// tree.insert(b"k", b"v2");
///
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 1);
/// assert_eq!(stats.updates, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of inserts that added a new key.
    pub inserts: u64,

    /// Number of inserts that overwrote an existing key's value.
    pub updates: u64,

    /// Number of deletes that removed an entry.
    pub removals: u64,

    /// Number of times a full root was split, growing the tree by a level.
    pub root_splits: u64,

    /// Number of times an empty root was discarded, shrinking the tree by
    /// a level (or emptying it).
    pub root_collapses: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, updates: {}, removals: {}, root_splits: {}, root_collapses: {} }}",
            self.inserts, self.updates, self.removals, self.root_splits, self.root_collapses
        )
    }
}
