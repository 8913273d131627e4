#![forbid(unsafe_code)]
//! netplot — interactive network-graph visualization.
//!
//! Renders a [`petgraph`] graph as an interactive [`plotly`] figure, mapping
//! centrality metrics onto visual node attributes:
//!
//! - **size** ← betweenness centrality, rescaled into `[7.5, 17.5]`;
//! - **color** ← closeness centrality through the "Jet" colorscale;
//! - **hover** ← node identifier and degree.
//!
//! ```no_run
//! use netplot::{GraphPlot, graph, layout};
//!
//! let g = graph::from_edges(&[], &[("a", "b"), ("b", "c"), ("c", "a")]);
//!
//! GraphPlot::new()
//!     .graph(g)
//!     .layout_fn(layout::kamada_kawai)
//!     .show()
//!     .expect("render");
//! ```
//!
//! Every call is one-shot and stateless: metrics, layout, and geometry are
//! recomputed in full, used, and discarded.
//!
//! # Conventions
//!
//! - **Errors**: library code returns [`Result`] with the [`Error`] enum;
//!   no panicking paths outside tests.
//! - **Logging**: `tracing` macros (`info!`, `debug!`) and `#[instrument]`
//!   on the metric and layout entry points.

pub mod error;
pub mod figure;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod scale;

pub use error::{Error, Result};
pub use figure::{GraphPlot, LayoutFn};
pub use geometry::RenderGeometry;
pub use graph::{Graph, Positions};
