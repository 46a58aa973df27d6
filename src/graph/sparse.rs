use hashbrown::HashSet;

use crate::graph::{Graph, Vertex};

/// Directed graph stored as a hash set of `(from, to)` pairs.
///
/// Memory is proportional to the number of edges rather than `size^2`, which
/// is the right trade for graphs that are large but sparse. Queries are the
/// same capability as [`DenseGraph`](crate::graph::DenseGraph), so the two
/// are interchangeable behind the [`Graph`] trait.
pub struct SparseGraph {
    /*private*/ edges: HashSet<(Vertex, Vertex)>,
    /*private*/ size: usize,
}

impl SparseGraph {
    /// Constructs a graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        SparseGraph {
            edges: HashSet::new(),
            size,
        }
    }

    /// Constructs a graph with `size` vertices and the given directed edges.
    ///
    /// # Panics
    ///
    /// Panics if any edge endpoint is `>= size`.
    pub fn from_edges(size: usize, edges: &[(Vertex, Vertex)]) -> Self {
        let mut graph = Self::new(size);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Inserts the directed edge `from -> to`. Inserting an edge twice is a
    /// no-op.
    ///
    /// # Panics
    ///
    /// Panics if `from >= size` or `to >= size`.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) {
        assert!(from < self.size);
        assert!(to < self.size);

        self.edges.insert((from, to));
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Graph for SparseGraph {
    fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `from >= size` or `to >= size`.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        assert!(from < self.size);
        assert!(to < self.size);

        self.edges.contains(&(from, to))
    }
}
