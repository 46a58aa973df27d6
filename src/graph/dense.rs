use crate::graph::{Graph, Vertex};

/// Directed graph stored as a flat boolean adjacency matrix.
///
/// Row `from`, column `to`. Suited to the small, dense graphs this crate's
/// queries typically run against; memory is `size * size` booleans.
///
/// # Examples
///
/// ```
/// use hopcheck::graph::{DenseGraph, Graph};
///
/// let mut g = DenseGraph::new(3);
/// g.add_edge(0, 1);
///
/// assert!(g.has_edge(0, 1));
/// assert!(!g.has_edge(1, 0));
/// ```
pub struct DenseGraph {
    /*private*/ matrix: Box<[bool]>,
    /*private*/ size: usize,
}

impl DenseGraph {
    /// Constructs a graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        DenseGraph {
            matrix: vec![false; size * size].into_boxed_slice(),
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

        self.matrix[from * self.size + to] = true
    }
}

impl Graph for DenseGraph {
    fn size(&self) -> usize {
        self.size
    }

    /// # Panics
    ///
    /// Panics if `from >= size` or `to >= size`.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        assert!(from < self.size);
        assert!(to < self.size);

        self.matrix[from * self.size + to]
    }
}
