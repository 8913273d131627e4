//! Circular layout: nodes evenly spaced on the unit circle.

use std::f64::consts::TAU;

use crate::error::{Error, Result};
use crate::graph::{Graph, Positions};

/// Place nodes on the unit circle in node-iteration order.
///
/// A single node lands at the origin.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] for a graph with no nodes.
#[allow(clippy::cast_precision_loss)]
pub fn circular(graph: &Graph) -> Result<Positions> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }

    if n == 1 {
        return Ok(graph.node_indices().map(|idx| (idx, (0.0, 0.0))).collect());
    }

    let step = TAU / n as f64;
    Ok(graph
        .node_indices()
        .enumerate()
        .map(|(i, idx)| {
            let theta = step * i as f64;
            (idx, (theta.cos(), theta.sin()))
        })
        .collect())
}
