use crate::sets::visited::VisitedSet;

/// A fixed-capacity visited marker packed into a contiguous buffer of
/// `u64` words.
///
/// Every index starts unvisited; marking is one-way and idempotent. A
/// traversal creates a fresh set per top-level call and discards it on
/// return, so no clearing operation is provided.
///
/// # Examples
///
/// ```
/// use hopcheck::sets::visited::{BitmapSet, VisitedSet};
///
/// let mut seen = BitmapSet::new(10);
/// assert!(!seen.is_visited(3));
///
/// seen.visit(3);
/// assert!(seen.is_visited(3));
/// ```
pub struct BitmapSet {
    /*private*/ words: Box<[u64]>,
    /*private*/ capacity: usize,
}

impl BitmapSet {
    /// Constructs a new [`BitmapSet`] covering the indices `0..capacity`,
    /// all unvisited.
    pub fn new(capacity: usize) -> Self {
        let words_needed: usize = capacity.div_ceil(64);
        BitmapSet {
            words: vec![0u64; words_needed].into_boxed_slice(),
            capacity,
        }
    }
}

impl VisitedSet for BitmapSet {
    /// Returns `true` if `index` has been visited.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn is_visited(&self, index: usize) -> bool {
        assert!(index < self.capacity);

        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Marks `index` as visited.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn visit(&mut self, index: usize) {
        assert!(index < self.capacity);

        self.words[index / 64] |= 1u64 << (index % 64)
    }
}
