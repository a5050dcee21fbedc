//! Key/value entry stored in a tree node.

/// A single key/value pair.
///
/// Keys are compared by byte-wise lexicographic order (`[u8]`'s `Ord`),
/// so a shorter key sorts before any of its extensions. Both key and
/// value may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl Entry {
    /// Create an entry owning copies of `key` and `value`.
    pub fn new(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            value: value.to_vec(),
        }
    }
}
