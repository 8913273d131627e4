//! Error types for graph visualization.

/// Errors surfaced while assembling or rendering a graph figure.
///
/// All failures are unrecoverable locally: there is no retry or
/// partial-result policy, the caller gets the error immediately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input graph has no nodes, so layout and centrality are undefined.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The layout function returned a position map missing at least one node.
    #[error("layout did not assign a position to node {node:?}")]
    IncompleteLayout {
        /// Identifier of the first node found without a position.
        node: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
