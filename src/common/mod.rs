//! Common types and utilities shared across bytetree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Branching factor configuration
//! - Error types

pub mod config;
pub mod error;

pub use config::{Branching, DEFAULT_DEGREE};
pub use error::{Error, Result};
