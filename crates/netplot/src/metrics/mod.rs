//! Centrality metrics for undirected graphs.
//!
//! # Overview
//!
//! Each metric answers a different question about node importance, and each
//! drives one visual channel of the rendered figure:
//!
//! - **Degree** (`degree`): How connected is a node? Shown in hover text.
//! - **Betweenness centrality** (`betweenness`): Which nodes act as bridges
//!   or bottlenecks? Drives marker size.
//! - **Closeness centrality** (`closeness`): Which nodes can reach the rest
//!   of the graph in few hops? Drives marker color.
//!
//! # Usage
//!
//! All metrics take a [`crate::graph::Graph`] reference and return scores as
//! a `Vec` aligned with the graph's node-iteration order (position `i` holds
//! the score of the node with index `i`). They are pure functions of the
//! graph snapshot: recomputed in full on every call, deterministic, no
//! incremental state.

pub mod betweenness;
pub mod closeness;
pub mod degree;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::degree;
