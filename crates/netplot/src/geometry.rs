//! Transient render geometry: the parallel arrays fed to the chart.
//!
//! # Overview
//!
//! [`RenderGeometry`] is the bridge between graph analysis and the charting
//! layer. It holds exactly what the two scatter traces need:
//!
//! - `edge_x`/`edge_y`: one 3-point polyline segment per edge — the two
//!   endpoints followed by a `None` break marker that tells the renderer to
//!   lift the pen, so consecutive edges are not visually joined. Length is
//!   always `3 × edge_count`.
//! - `node_x`/`node_y`, `sizes`, `colors`, `hover`: one entry per node, in
//!   node-iteration order. Sizes are betweenness scores rescaled into
//!   [`crate::scale::NODE_SIZE_RANGE`]; colors are *raw* closeness scores
//!   (the chart's colorscale does its own normalization); hover text pairs
//!   the node identifier with its degree.
//!
//! The struct is rebuilt fresh on every call and never persisted.

use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Positions};
use crate::metrics::{betweenness_centrality, closeness_centrality, degree};
use crate::scale::{self, NODE_SIZE_RANGE};

/// Per-call arrays for one figure: edge polylines plus node attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGeometry {
    /// Edge x-coordinates; `None` separates segments.
    pub edge_x: Vec<Option<f64>>,
    /// Edge y-coordinates; `None` separates segments.
    pub edge_y: Vec<Option<f64>>,
    /// Node x-coordinates.
    pub node_x: Vec<f64>,
    /// Node y-coordinates.
    pub node_y: Vec<f64>,
    /// Marker sizes: betweenness rescaled into [`NODE_SIZE_RANGE`].
    pub sizes: Vec<f64>,
    /// Marker colors: raw closeness centrality.
    pub colors: Vec<f64>,
    /// Hover labels: `"{id}<br>Degree: {degree}"`.
    pub hover: Vec<String>,
}

impl RenderGeometry {
    /// Assemble geometry for `graph` using the given node positions.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no nodes.
    /// - [`Error::IncompleteLayout`] if `positions` is missing any node.
    pub fn build(graph: &Graph, positions: &Positions) -> Result<Self> {
        if graph.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let position_of = |idx| {
            positions
                .get(&idx)
                .copied()
                .ok_or_else(|| Error::IncompleteLayout {
                    node: graph[idx].clone(),
                })
        };

        let edge_count = graph.edge_count();
        let mut edge_x: Vec<Option<f64>> = Vec::with_capacity(3 * edge_count);
        let mut edge_y: Vec<Option<f64>> = Vec::with_capacity(3 * edge_count);

        for edge in graph.edge_references() {
            let (x0, y0) = position_of(edge.source())?;
            let (x1, y1) = position_of(edge.target())?;
            edge_x.extend([Some(x0), Some(x1), None]);
            edge_y.extend([Some(y0), Some(y1), None]);
        }

        let degrees = degree(graph);
        let betweenness = betweenness_centrality(graph);
        let closeness = closeness_centrality(graph);

        let mut node_x = Vec::with_capacity(graph.node_count());
        let mut node_y = Vec::with_capacity(graph.node_count());
        let mut hover = Vec::with_capacity(graph.node_count());

        for (i, idx) in graph.node_indices().enumerate() {
            let (x, y) = position_of(idx)?;
            node_x.push(x);
            node_y.push(y);
            hover.push(format!("{}<br>Degree: {}", graph[idx], degrees[i]));
        }

        let sizes = scale::min_max(&betweenness, NODE_SIZE_RANGE);

        debug!(
            nodes = graph.node_count(),
            edges = edge_count,
            "assembled render geometry"
        );

        Ok(Self {
            edge_x,
            edge_y,
            node_x,
            node_y,
            sizes,
            colors: closeness,
            hover,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
