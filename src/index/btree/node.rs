//! B-tree node and the node-level algorithms.
//!
//! A node owns its entries and its child subtrees outright: children are
//! `Box<Node>` values held in a `Vec`, never shared, so splits and merges
//! are explicit ownership moves between parents. A node is a leaf iff it
//! has no children; an internal node always has exactly one more child
//! than it has entries.
//!
//! All re-balancing is preemptive:
//! - [`Node::insert`] splits a full child *before* descending into it, so a
//!   split never has to propagate upward.
//! - [`Node::remove`] refills a child that dipped below the minimum *as the
//!   recursive call returns*, before this level's own invariant is checked
//!   by its parent.

use std::cmp::Ordering;

use crate::common::config::Branching;
use crate::index::btree::entry::Entry;

/// What a recursive remove call is looking for.
///
/// Deleting a key held in an internal node substitutes its in-order
/// successor, which means the recursion into the right subtree is no longer
/// searching by key at all; it is retrieving the subtree's minimum. Making
/// that an explicit request variant keeps the leaf base case honest.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RemoveTarget<'a> {
    /// Remove the entry with exactly this key, if present.
    Key(&'a [u8]),
    /// Remove the smallest entry in the subtree.
    Min,
}

/// A single B-tree node.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// Entries in strictly increasing key order, no duplicates.
    pub entries: Vec<Entry>,
    /// Owned child subtrees; empty for a leaf, `entries.len() + 1` otherwise.
    pub children: Vec<Box<Node>>,
}

impl Node {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a leaf holding a single entry.
    pub fn leaf_with(entry: Entry) -> Self {
        Self {
            entries: vec![entry],
            children: Vec::new(),
        }
    }

    /// A node is a leaf iff it owns no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node is at entry capacity and must split before
    /// accepting another entry.
    #[inline]
    pub fn is_full(&self, branching: Branching) -> bool {
        self.entries.len() == branching.max_items()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Binary search this node's entries for `key`.
    ///
    /// Returns `(pos, true)` if the entry at `pos` has exactly this key.
    /// Otherwise returns `(pos, false)` where `pos` is the index of the
    /// first entry with a greater key — which is also the index of the
    /// child subtree that would contain `key`. An empty node yields
    /// `(0, false)`.
    pub fn search(&self, key: &[u8]) -> (usize, bool) {
        let mut low = 0;
        let mut high = self.entries.len();

        while low < high {
            let mid = low + (high - low) / 2;

            match key.cmp(self.entries[mid].key.as_slice()) {
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
                Ordering::Equal => return (mid, true),
            }
        }

        (low, false)
    }

    // ========================================================================
    // Split
    // ========================================================================

    /// Split this full node in half, returning the promoted middle entry
    /// and the new right sibling.
    ///
    /// The entry at index `min_items` is removed and handed to the caller
    /// for insertion into the parent. This node keeps the first `min_items`
    /// entries; everything after the promoted entry moves to the right
    /// sibling. For an internal node the children after index `min_items`
    /// move across as well, leaving `min_items + 1` children on each side.
    pub fn split(&mut self, branching: Branching) -> (Entry, Box<Node>) {
        debug_assert!(self.is_full(branching), "split requires a full node");

        let mid = branching.min_items();

        let right_entries = self.entries.split_off(mid + 1);
        let promoted = self
            .entries
            .pop()
            .expect("full node has an entry at the split point");

        let right_children = if self.is_leaf() {
            Vec::new()
        } else {
            self.children.split_off(mid + 1)
        };

        let right = Box::new(Node {
            entries: right_entries,
            children: right_children,
        });

        (promoted, right)
    }

    /// Split the full child at `pos`, absorbing the promoted entry and the
    /// new right sibling into this node at `pos` / `pos + 1`.
    pub fn split_child(&mut self, pos: usize, branching: Branching) {
        let (promoted, right) = self.children[pos].split(branching);
        self.entries.insert(pos, promoted);
        self.children.insert(pos + 1, right);
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert `entry`, splitting any full child before descending into it.
    ///
    /// Returns `true` if the key was new, `false` if an existing entry's
    /// value was overwritten (last write wins).
    ///
    /// The caller guarantees this node is not full: the tree handle
    /// pre-splits a full root, and every internal level below pre-splits
    /// full children here before recursing. That is what makes a single
    /// downward pass sufficient.
    pub fn insert(&mut self, entry: Entry, branching: Branching) -> bool {
        let (mut pos, found) = self.search(&entry.key);

        if found {
            self.entries[pos].value = entry.value;
            return false;
        }

        if self.is_leaf() {
            self.entries.insert(pos, entry);
            return true;
        }

        if self.children[pos].is_full(branching) {
            self.split_child(pos, branching);

            // The promoted separator now sits at `pos`; re-compare to pick
            // the correct half, or update the separator itself on an exact
            // match.
            match entry.key.as_slice().cmp(self.entries[pos].key.as_slice()) {
                Ordering::Equal => {
                    self.entries[pos].value = entry.value;
                    return false;
                }
                Ordering::Greater => pos += 1,
                Ordering::Less => {}
            }
        }

        self.children[pos].insert(entry, branching)
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Remove an entry from the subtree rooted here.
    ///
    /// Returns the removed entry, or `None` if the key was not present.
    /// After every recursive descent the visited child is refilled if the
    /// removal left it below `min_items`, so by the time this call returns
    /// only this node itself may be underfull — and that is its own
    /// parent's (or the tree handle's) responsibility.
    pub fn remove(&mut self, target: RemoveTarget<'_>, branching: Branching) -> Option<Entry> {
        match target {
            RemoveTarget::Min => {
                if self.is_leaf() {
                    // Seeking the minimum always happens inside a non-empty
                    // subtree, so the leftmost leaf has an entry to give.
                    return Some(self.entries.remove(0));
                }
                let removed = self.children[0].remove(RemoveTarget::Min, branching);
                self.refill_if_underfull(0, branching);
                removed
            }
            RemoveTarget::Key(key) => {
                let (pos, found) = self.search(key);

                if found && self.is_leaf() {
                    return Some(self.entries.remove(pos));
                }

                if found {
                    // The entry is a separator; removing it outright would
                    // break the entry/child pairing. Substitute its in-order
                    // successor: the minimum of the right subtree.
                    let successor = self.children[pos + 1]
                        .remove(RemoveTarget::Min, branching)
                        .expect("subtree right of an entry is never empty");
                    let removed = std::mem::replace(&mut self.entries[pos], successor);
                    self.refill_if_underfull(pos + 1, branching);
                    return Some(removed);
                }

                if self.is_leaf() {
                    // Not present anywhere; a normal outcome, not an error.
                    return None;
                }

                let removed = self.children[pos].remove(target, branching);
                self.refill_if_underfull(pos, branching);
                removed
            }
        }
    }

    // ========================================================================
    // Fill (borrow-or-merge)
    // ========================================================================

    /// Refill `children[pos]` if the last removal dropped it below the
    /// minimum occupancy.
    fn refill_if_underfull(&mut self, pos: usize, branching: Branching) {
        if self.children[pos].entries.len() < branching.min_items() {
            self.fill_child_at(pos, branching);
        }
    }

    /// Restore `children[pos]` to at least `min_items` entries.
    ///
    /// In priority order: borrow the left sibling's last entry, borrow the
    /// right sibling's first entry, or merge with a sibling. Borrowing
    /// rotates through the parent separator; merging pulls the separator
    /// down and may leave *this* node underfull, which the next level up
    /// repairs in turn.
    pub fn fill_child_at(&mut self, pos: usize, branching: Branching) {
        if pos > 0 && self.children[pos - 1].entries.len() > branching.min_items() {
            self.borrow_from_left(pos);
        } else if pos + 1 < self.children.len()
            && self.children[pos + 1].entries.len() > branching.min_items()
        {
            self.borrow_from_right(pos);
        } else if pos + 1 == self.children.len() {
            self.merge_children(pos - 1);
        } else {
            self.merge_children(pos);
        }
    }

    /// Rotate the left sibling's last entry up into the separator and the
    /// old separator down into `children[pos]`.
    fn borrow_from_left(&mut self, pos: usize) {
        let (head, tail) = self.children.split_at_mut(pos);
        let left = &mut head[pos - 1];
        let child = &mut tail[0];

        let spare = left
            .entries
            .pop()
            .expect("left sibling has more than min_items entries");
        let separator = std::mem::replace(&mut self.entries[pos - 1], spare);
        child.entries.insert(0, separator);

        // Siblings sit at the same height: the donor's last subtree follows
        // its donated entry across.
        if let Some(subtree) = left.children.pop() {
            child.children.insert(0, subtree);
        }
    }

    /// Rotate the right sibling's first entry up into the separator and the
    /// old separator down into `children[pos]`.
    fn borrow_from_right(&mut self, pos: usize) {
        let (head, tail) = self.children.split_at_mut(pos + 1);
        let child = &mut head[pos];
        let right = &mut tail[0];

        let spare = right.entries.remove(0);
        let separator = std::mem::replace(&mut self.entries[pos], spare);
        child.entries.push(separator);

        if !right.children.is_empty() {
            child.children.push(right.children.remove(0));
        }
    }

    /// Merge `children[pos]`, the separator at `pos`, and `children[pos+1]`
    /// into a single node, destroying the right sibling.
    fn merge_children(&mut self, pos: usize) {
        let right = *self.children.remove(pos + 1);
        let separator = self.entries.remove(pos);

        let child = &mut self.children[pos];
        child.entries.push(separator);
        child.entries.extend(right.entries);
        child.children.extend(right.children);
    }
}
