//! Index structures.
//!
//! Currently a single ordered index is provided:
//! - [`btree`] - an in-memory top-down B-tree over byte-sequence keys

pub mod btree;

pub use btree::BTree;
