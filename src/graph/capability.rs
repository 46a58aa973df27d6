/// The type of the index of a vertex in a graph.
pub type Vertex = usize;

/// Read-only view of a directed graph over contiguous vertex indices.
///
/// Vertices are identified by indices in `0..size()`. The trait only answers
/// membership queries; traversals enumerate the successors of a vertex by
/// probing `has_edge` against every candidate endpoint in ascending order.
///
/// Implementations must be stable for the duration of a traversal: repeated
/// calls with the same arguments return the same answer.
pub trait Graph {
    /// Returns the number of vertices. Valid indices are `0..size()`.
    fn size(&self) -> usize;

    /// Returns `true` iff a directed edge `from -> to` exists.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool;
}
