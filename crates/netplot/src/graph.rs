//! Input graph type and the canonical default graph.
//!
//! # Overview
//!
//! The visualizer accepts any undirected [`petgraph`] graph with string node
//! identifiers. Nothing here is persisted: a graph is built (or borrowed),
//! measured, laid out, drawn, and dropped within a single call.
//!
//! When the caller supplies no graph, [`tutte_graph`] provides the default:
//! Tutte's graph, a well-known 3-regular planar graph on 46 vertices. Its
//! uniform degree makes the size/color encodings easy to eyeball — every
//! visible difference comes from betweenness and closeness, not degree.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

/// Undirected graph with string node identifiers and unweighted edges.
pub type Graph = UnGraph<String, ()>;

/// Node positions produced by a layout function.
///
/// Invariant expected by the figure assembler: exactly one entry per node in
/// the graph. A missing node surfaces as [`crate::Error::IncompleteLayout`].
pub type Positions = HashMap<NodeIndex, (f64, f64)>;

/// Adjacency list for Tutte's graph. Entry `i` lists the neighbors of
/// vertex `i` with a larger index, so each edge appears exactly once.
#[rustfmt::skip]
const TUTTE_ADJACENCY: [&[usize]; 46] = [
    &[1, 2, 3],   &[4, 26],     &[10, 11],    &[18, 19],    &[5, 33],
    &[6, 29],     &[7, 27],     &[8, 14],     &[9, 38],     &[10, 37],
    &[39],        &[12, 39],    &[13, 35],    &[14, 15],    &[34],
    &[16, 22],    &[17, 44],    &[18, 43],    &[45],        &[20, 45],
    &[21, 41],    &[22, 23],    &[40],        &[24, 27],    &[25, 32],
    &[26, 31],    &[33],        &[28],        &[29, 32],    &[30],
    &[31, 33],    &[32],        &[],          &[],          &[35, 38],
    &[36],        &[37, 39],    &[38],        &[],          &[],
    &[41, 44],    &[42],        &[43, 45],    &[44],        &[],
    &[],
];

/// Build Tutte's graph: 46 nodes labelled `"0"` through `"45"`, 69 edges,
/// every vertex of degree 3.
#[must_use]
pub fn tutte_graph() -> Graph {
    let mut graph = Graph::with_capacity(46, 69);

    let nodes: Vec<NodeIndex> = (0..46).map(|i| graph.add_node(i.to_string())).collect();

    for (i, neighbors) in TUTTE_ADJACENCY.iter().enumerate() {
        for &j in *neighbors {
            graph.add_edge(nodes[i], nodes[j], ());
        }
    }

    graph
}

/// Build a graph from a node list and an edge list of identifier pairs.
///
/// Handy for tests and small ad-hoc graphs. Nodes referenced only by edges
/// are created on demand.
#[must_use]
pub fn from_edges(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new_undirected();
    let mut index: HashMap<String, NodeIndex> = HashMap::new();

    for id in nodes {
        let idx = graph.add_node((*id).to_string());
        index.insert((*id).to_string(), idx);
    }

    for (a, b) in edges {
        let ia = *index
            .entry((*a).to_string())
            .or_insert_with(|| graph.add_node((*a).to_string()));
        let ib = *index
            .entry((*b).to_string())
            .or_insert_with(|| graph.add_node((*b).to_string()));
        graph.add_edge(ia, ib, ());
    }

    graph
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
