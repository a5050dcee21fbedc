//! Error types for bytetree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in bytetree.
///
/// The taxonomy is deliberately narrow: lookups are the only fallible
/// operation. Inserting cannot fail (capacity is unbounded via splitting)
/// and deleting an absent key is a normal no-op reported through a `bool`,
/// not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The requested key does not exist anywhere in the tree.
    ///
    /// Also returned when searching an empty tree.
    #[error("key not found")]
    KeyNotFound,
}
