//! Degree per node.

use crate::graph::Graph;

/// Number of incident edges per node, aligned with node-iteration order.
///
/// Parallel edges each count; a self-loop counts once (petgraph's
/// incident-edge convention).
#[must_use]
pub fn degree(graph: &Graph) -> Vec<usize> {
    graph
        .node_indices()
        .map(|idx| graph.edges(idx).count())
        .collect()
}
