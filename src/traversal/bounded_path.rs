use tracing::trace;

use crate::{
    graph::{Graph, Vertex},
    sets::visited::{BitmapSet, VisitedSet},
    statistics::TraversalStats,
};

/// Recursive depth-first expansion towards `goal`.
///
/// Succeeds as soon as the current vertex *is* the goal; otherwise marks the
/// current vertex and recurses into its successors in ascending index order.
/// The goal check comes before the visited check, so a branch that lands on
/// the goal succeeds even if the goal was marked on an earlier branch.
fn expand<G, V>(
    graph: &G,
    curr: Vertex,
    goal: Vertex,
    seen: &mut V,
    stats: &mut TraversalStats,
) -> bool
where
    G: Graph,
    V: VisitedSet,
{
    if curr == goal {
        return true;
    }

    if seen.is_visited(curr) {
        return false;
    }

    seen.visit(curr);
    stats.bump_expansions();

    let size = graph.size();

    for succ in 0..size {
        stats.bump_edge_probes(1);
        if graph.has_edge(curr, succ) && expand(graph, succ, goal, seen, stats) {
            return true;
        }
    }

    false
}

/// Determines whether there is a directed path from vertex `src` to vertex
/// `dst` whose length is `n` or fewer.
///
/// A fresh visited marker is allocated per call, so repeated queries on an
/// unmodified graph always return the same answer. Recursion depth and
/// auxiliary space are both O(`graph.size()`).
///
/// # Caveats
///
/// The bound `n` is enforced solely by an upfront index-gap prefilter on
/// `dst.wrapping_sub(src)`; the traversal itself is not depth-limited, so
/// once the prefilter passes the answer is plain reachability. Two
/// consequences:
/// - a path longer than `n` still satisfies a query whose index gap fits the
///   bound;
/// - the subtraction wraps when `dst < src`, so every such query is rejected
///   by the prefilter no matter what the graph contains.
///
/// # Panics
///
/// Panics if `src` or `dst` is `>= graph.size()`; invalid indices are a
/// caller error, not a recoverable condition. Queries rejected by the
/// prefilter return `false` before the range checks run.
///
/// # Examples
///
/// ```
/// use hopcheck::{graph::DenseGraph, traversal::has_path_within};
///
/// // 0 -> 1 -> 2
/// let g = DenseGraph::from_edges(3, &[(0, 1), (1, 2)]);
///
/// assert!(has_path_within(&g, 0, 2, 2));
/// assert!(!has_path_within(&g, 0, 2, 1));
/// ```
pub fn has_path_within<G: Graph>(graph: &G, src: Vertex, dst: Vertex, n: usize) -> bool {
    let mut stats = TraversalStats::new();
    has_path_within_recorded(graph, src, dst, n, &mut stats)
}

/// Same operation as [`has_path_within`], recording traversal counters into
/// `stats`.
pub fn has_path_within_recorded<G: Graph>(
    graph: &G,
    src: Vertex,
    dst: Vertex,
    n: usize,
    stats: &mut TraversalStats,
) -> bool {
    // Deliberately wrapping: when dst < src the difference wraps to a huge
    // value and the query is rejected right here.
    if dst.wrapping_sub(src) > n {
        stats.bump_gap_rejections();
        trace!(src, dst, n, "query rejected by index-gap prefilter");
        return false;
    }

    let size = graph.size();

    assert!(src < size);
    assert!(dst < size);

    let mut seen = BitmapSet::new(size);

    expand(graph, src, dst, &mut seen, stats)
}
