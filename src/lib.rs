//! bytetree - An in-memory ordered key/value index built on a top-down B-tree.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        bytetree                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │             Tree handle (index/btree)               │  │
//! │  │    find / insert / delete + root growth/shrink      │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │            Node algorithms (index/btree)            │  │
//! │  │  binary search · preemptive split · borrow-or-merge │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │            Common primitives (common/)              │  │
//! │  │           Branching config + Error/Result           │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation runs a single downward pass from the root: inserts split
//! full children before descending, deletes refill under-minimum children as
//! each recursive call returns. No operation ever walks back up the tree to
//! re-balance.
//!
//! # Modules
//! - [`common`] - Shared primitives (Branching, Error, Result)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use bytetree::BTree;
//!
//! let mut tree = BTree::new();
//! tree.insert(b"hello", b"world");
//!
//! assert_eq!(tree.find(b"hello").unwrap(), b"world");
//! assert!(tree.delete(b"hello"));
//! assert!(tree.find(b"hello").is_err());
//! ```
//!
//! # Thread Safety
//! The tree is an exclusively-owned mutable structure. All operations are
//! synchronous and run to completion on the caller's thread; concurrent
//! access must be serialized by the caller with an external lock.

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{Branching, DEFAULT_DEGREE};
pub use common::{Error, Result};
pub use index::btree::{BTree, TreeStats};
