use std::hash::{BuildHasherDefault, Hasher};

use crate::sets::visited::VisitedSet;

/// Pass-through hasher for keys that are already well-distributed vertex
/// indices.
#[derive(Default)]
pub struct IdentityHasher {
    hash: u64,
}

impl Hasher for IdentityHasher {
    fn write(&mut self, _bytes: &[u8]) {
        panic!("identity hashing only accepts u64/usize keys");
    }

    fn write_usize(&mut self, i: usize) {
        self.hash = i as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }

    fn finish(&self) -> u64 {
        self.hash
    }
}

/// Hash-set visited marker, an alternative to
/// [`BitmapSet`](crate::sets::visited::BitmapSet) when the index space is
/// huge and a traversal touches only a sliver of it.
///
/// Construct with `IndexSet::default()`.
pub type IndexSet = hashbrown::HashSet<usize, BuildHasherDefault<IdentityHasher>>;

impl VisitedSet for IndexSet {
    fn is_visited(&self, i: usize) -> bool {
        self.contains(&i)
    }

    fn visit(&mut self, i: usize) {
        self.insert(i);
    }
}
