//! In-memory B-tree index.
//!
//! A balanced multiway search tree over byte-sequence keys with the
//! top-down (preemptive) re-balancing discipline: a full child is split
//! before insertion descends into it, and an under-minimum child is
//! refilled the moment a recursive delete call returns from it. A single
//! downward pass therefore suffices for every operation.
//!
//! # Components
//! - [`BTree`] - The public tree handle (find / insert / delete)
//! - [`TreeStats`] - Operation counters
//! - `Node` / `Entry` - Internal node-level algorithms

mod entry;
mod node;
mod stats;
mod tree;

pub use stats::TreeStats;
pub use tree::BTree;

#[cfg(test)]
mod proptests;
