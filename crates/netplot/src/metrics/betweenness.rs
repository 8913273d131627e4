//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are "bridges" or
//! "bottlenecks": removing them would disconnect parts of the graph. In the
//! rendered figure this score drives marker size.
//!
//! # Algorithm
//!
//! Brandes' algorithm (2001) for unweighted undirected graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes
//!    first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E).
//!
//! # Normalization
//!
//! Scores are normalized by `1 / ((n - 1) * (n - 2))`. The undirected
//! accumulation visits each unordered pair from both endpoints, so the
//! combined effect is the usual "fraction of pairs" normalization: a node on
//! every shortest path between all other pairs scores 1.0. Graphs with two
//! or fewer nodes have no intermediary pairs and score 0.0 everywhere.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::instrument;

use crate::graph::Graph;

/// Compute normalized betweenness centrality for every node.
///
/// Returns scores aligned with node-iteration order. Disconnected nodes and
/// nodes with no shortest paths through them score 0.0.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    if n == 0 {
        return cb;
    }

    // For each source node s, run Brandes' BFS-based algorithm.
    for s in graph.node_indices() {
        let si = s.index();

        // Stack: nodes in order of discovery (farthest popped first).
        let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest
        // paths from s.
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[si] = 1.0;

        // dist[t]: distance from s to t (-1 = unvisited).
        let mut dist: Vec<i64> = vec![-1; n];
        dist[si] = 0;

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(v);

            for w in graph.neighbors(v) {
                let wi = w.index();

                // First visit to w?
                if dist[wi] < 0 {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            let wi = w.index();

            for &v in &predecessors[wi] {
                let vi = v.index();
                if sigma[wi] > 0.0 {
                    delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
                }
            }

            if wi != si {
                cb[wi] += delta[wi];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for score in &mut cb {
            *score *= scale;
        }
    }

    cb
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::from_edges;

    #[test]
    fn empty_graph_returns_empty() {
        let g = from_edges(&[], &[]);
        assert!(betweenness_centrality(&g).is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        let g = from_edges(&["A"], &[]);
        let bc = betweenness_centrality(&g);
        assert!((bc[0] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn path_of_three_middle_node() {
        // A - B - C
        // B is on the only A..C shortest path, the only such pair.
        let g = from_edges(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(&g);

        assert!((bc[0] - 0.0).abs() < 1e-10, "A is an endpoint");
        assert!((bc[1] - 1.0).abs() < 1e-10, "B bridges the one pair");
        assert!((bc[2] - 0.0).abs() < 1e-10, "C is an endpoint");
    }

    #[test]
    fn path_of_four_interior_nodes() {
        // A - B - C - D
        // B is interior to pairs (A,C) and (A,D): 2 of 3 pairs → 2/3.
        // C symmetric.
        let g = from_edges(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "C"), ("C", "D")],
        );
        let bc = betweenness_centrality(&g);

        assert!((bc[0] - 0.0).abs() < 1e-10);
        assert!((bc[1] - 2.0 / 3.0).abs() < 1e-10, "B: got {}", bc[1]);
        assert!((bc[2] - 2.0 / 3.0).abs() < 1e-10, "C: got {}", bc[2]);
        assert!((bc[3] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn star_center_bridges_every_pair() {
        // B, C, D all attach to A. Every leaf pair routes through A:
        // 3 of 3 pairs → 1.0.
        let g = from_edges(&[], &[("A", "B"), ("A", "C"), ("A", "D")]);
        let bc = betweenness_centrality(&g);

        // from_edges creates A first.
        assert!((bc[0] - 1.0).abs() < 1e-10, "hub: got {}", bc[0]);
        for (i, score) in bc.iter().enumerate().skip(1) {
            assert!((score - 0.0).abs() < 1e-10, "leaf {i} should score 0");
        }
    }

    #[test]
    fn cycle_of_four_splits_evenly() {
        // A - B - C - D - A
        // Each opposite pair has two shortest paths; each node carries half
        // of one pair: 0.5 / 3 = 1/6.
        let g = from_edges(
            &[],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
        );
        let bc = betweenness_centrality(&g);

        for score in &bc {
            assert!(
                (score - 1.0 / 6.0).abs() < 1e-10,
                "cycle is vertex-transitive, got {score}"
            );
        }
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        // A - B and C - D: no path crosses components.
        let g = from_edges(&[], &[("A", "B"), ("C", "D")]);
        let bc = betweenness_centrality(&g);

        for score in &bc {
            assert!((score - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn two_node_graph_scores_zero() {
        let g = from_edges(&[], &[("A", "B")]);
        let bc = betweenness_centrality(&g);
        assert_eq!(bc, vec![0.0, 0.0]);
    }
}
