//! Branching factor configuration for the B-tree.

/// Default branching factor `t`.
///
/// With `t = 5` every node holds at most 9 entries and 10 children, so a
/// million keys fit in a tree about six levels deep. Small enough that the
/// per-node linear shifts on insert/remove stay cheap, large enough that
/// binary search inside a node beats a plain scan.
pub const DEFAULT_DEGREE: usize = 5;

/// Capacity parameters derived from a branching factor `t`.
///
/// The classic B-tree bounds:
/// - `max_items = 2t - 1` — entries per node before it must split
/// - `min_items = t - 1` — entries every non-root node must keep at rest
/// - `max_children = 2t` — child slots per node (`max_items + 1`)
///
/// The root is exempt from the lower bound: it may hold as few as zero
/// entries while the tree is empty or shrinking.
///
/// # Example
/// ```
/// use bytetree::Branching;
///
/// let b = Branching::new(5);
/// assert_eq!(b.max_items(), 9);
/// assert_eq!(b.min_items(), 4);
/// assert_eq!(b.max_children(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branching {
    degree: usize,
}

impl Branching {
    /// Create capacity parameters for branching factor `t`.
    ///
    /// # Panics
    /// Panics if `t < 2`. A branching factor below 2 cannot satisfy the
    /// B-tree capacity invariants (a split would produce empty halves).
    pub fn new(degree: usize) -> Self {
        assert!(degree >= 2, "branching factor must be >= 2");
        Self { degree }
    }

    /// The branching factor `t`.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Maximum entries a node may hold (`2t - 1`).
    #[inline]
    pub fn max_items(&self) -> usize {
        2 * self.degree - 1
    }

    /// Minimum entries every non-root node must hold at rest (`t - 1`).
    #[inline]
    pub fn min_items(&self) -> usize {
        self.degree - 1
    }

    /// Maximum children a node may hold (`2t`).
    #[inline]
    pub fn max_children(&self) -> usize {
        2 * self.degree
    }
}

impl Default for Branching {
    fn default() -> Self {
        Self::new(DEFAULT_DEGREE)
    }
}
