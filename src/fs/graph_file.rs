use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::graph::{SparseGraph, Vertex};

/// On-disk description of a directed graph, one JSON object per file:
///
/// ```json
/// { "vertices": 4, "edges": [[0, 1], [1, 2], [3, 0]] }
/// ```
///
/// Vertex indices must lie in `0..vertices`; violations surface as panics
/// when the description is turned into a graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: usize,
    pub edges: Vec<(Vertex, Vertex)>,
}

impl GraphFile {
    /// Reads and parses a graph file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be opened or does not parse as a graph
    /// description.
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        let reader = BufReader::new(File::open(path).expect("graph file not found"));

        serde_json::from_reader(reader).expect("malformed graph file")
    }

    /// Builds the described graph in the sparse representation.
    ///
    /// # Panics
    ///
    /// Panics if any edge endpoint is `>= vertices`.
    pub fn into_sparse(self) -> SparseGraph {
        SparseGraph::from_edges(self.vertices, &self.edges)
    }
}
