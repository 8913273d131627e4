//! Figure assembly and display.
//!
//! # Overview
//!
//! [`GraphPlot`] is the front door of the crate. It resolves the optional
//! graph and layout function to their defaults *inside* the call (the Tutte
//! graph and [`crate::layout::kamada_kawai`]), computes metrics and
//! geometry, and hands two scatter traces to [`plotly`]:
//!
//! - an **edge trace**: thin gray polylines, no hover, no markers;
//! - a **node trace**: markers sized by betweenness, colored by closeness
//!   through the "Jet" palette with a "Closeness" colorbar, hover text with
//!   identifier and degree, black outline of width 1.
//!
//! `geometry()` and `figure()` are pure; only [`GraphPlot::show`] has a side
//! effect (opening the rendered figure). There is no hidden process-global
//! renderer state to initialize.

use plotly::common::{
    Anchor, ColorBar, ColorScale, ColorScalePalette, HoverInfo, Line, Marker, Mode, Title,
};
use plotly::layout::{Axis, HoverMode, Margin};
use plotly::{Plot, Scatter};
use tracing::info;

use crate::error::{Error, Result};
use crate::geometry::RenderGeometry;
use crate::graph::{Graph, Positions, tutte_graph};
use crate::layout::kamada_kawai;

/// Boxed layout function: any pure `&Graph -> Positions` mapping.
pub type LayoutFn = Box<dyn Fn(&Graph) -> Result<Positions>>;

/// Builder for one interactive graph figure.
///
/// ```no_run
/// use netplot::GraphPlot;
///
/// // Render the default Tutte graph with the default layout.
/// GraphPlot::new().show().expect("render");
/// ```
#[derive(Default)]
pub struct GraphPlot {
    graph: Option<Graph>,
    layout_fn: Option<LayoutFn>,
}

impl GraphPlot {
    /// Start a plot with the default graph and layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `graph` instead of the default Tutte graph.
    #[must_use]
    pub fn graph(mut self, graph: Graph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Use `layout` instead of the default Kamada–Kawai layout.
    #[must_use]
    pub fn layout_fn<F>(mut self, layout: F) -> Self
    where
        F: Fn(&Graph) -> Result<Positions> + 'static,
    {
        self.layout_fn = Some(Box::new(layout));
        self
    }

    /// Compute the render geometry: metrics, layout, and trace arrays.
    ///
    /// Pure and deterministic: calling this twice on the same builder
    /// produces identical arrays.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no nodes.
    /// - [`Error::IncompleteLayout`] if the layout function skips a node.
    /// - Any error the custom layout function returns.
    pub fn geometry(&self) -> Result<RenderGeometry> {
        let default_graph;
        let graph = match &self.graph {
            Some(g) => g,
            None => {
                default_graph = tutte_graph();
                &default_graph
            }
        };

        if graph.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        let positions = match &self.layout_fn {
            Some(layout) => layout(graph)?,
            None => kamada_kawai(graph)?,
        };

        RenderGeometry::build(graph, &positions)
    }

    /// Compose the plotly figure without displaying it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GraphPlot::geometry`].
    pub fn figure(&self) -> Result<Plot> {
        Ok(to_plot(self.geometry()?))
    }

    /// Compose the figure and open it for interactive viewing.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GraphPlot::geometry`].
    pub fn show(&self) -> Result<()> {
        let plot = self.figure()?;
        info!("displaying graph figure");
        plot.show();
        Ok(())
    }
}

impl std::fmt::Debug for GraphPlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphPlot")
            .field("graph", &self.graph.as_ref().map(|g| g.node_count()))
            .field("layout_fn", &self.layout_fn.as_ref().map(|_| "custom"))
            .finish()
    }
}

/// Turn geometry arrays into the two-trace plotly figure.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_plot(geometry: RenderGeometry) -> Plot {
    let edge_trace = Scatter::new(geometry.edge_x, geometry.edge_y)
        .mode(Mode::Lines)
        .line(Line::new().width(0.5).color("#888"))
        .hover_info(HoverInfo::None);

    // The marker size field is integral; the exact scaled values live in
    // the geometry for callers that need them.
    let sizes: Vec<usize> = geometry.sizes.iter().map(|s| s.round() as usize).collect();

    let node_trace = Scatter::new(geometry.node_x, geometry.node_y)
        .mode(Mode::Markers)
        .hover_info(HoverInfo::Text)
        .text_array(geometry.hover)
        .marker(
            Marker::new()
                .show_scale(true)
                .color_scale(ColorScale::Palette(ColorScalePalette::Jet))
                .color_array(geometry.colors)
                .size_array(sizes)
                .color_bar(
                    ColorBar::new()
                        .thickness(15)
                        .title(Title::with_text("Closeness"))
                        .x_anchor(Anchor::Left),
                )
                .line(Line::new().width(1.0).color("black")),
        );

    let hidden_axis = || {
        Axis::new()
            .show_grid(false)
            .zero_line(false)
            .show_tick_labels(false)
    };

    let layout = plotly::Layout::new()
        .auto_size(true)
        .show_legend(false)
        .hover_mode(HoverMode::Closest)
        .margin(Margin::new().bottom(20).left(5).right(5).top(40))
        .x_axis(hidden_axis())
        .y_axis(hidden_axis());

    let mut plot = Plot::new();
    plot.add_trace(edge_trace);
    plot.add_trace(node_trace);
    plot.set_layout(layout);
    plot
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::from_edges;
    use crate::layout::circular;

    #[test]
    fn default_plot_uses_tutte_graph() {
        let geom = GraphPlot::new().geometry().expect("geometry");
        assert_eq!(geom.node_x.len(), 46);
        assert_eq!(geom.edge_x.len(), 3 * 69);
    }

    #[test]
    fn empty_graph_is_rejected() {
        let plot = GraphPlot::new().graph(from_edges(&[], &[]));
        assert_eq!(plot.geometry(), Err(Error::EmptyGraph));
    }

    #[test]
    fn custom_layout_is_used() {
        let g = from_edges(&[], &[("A", "B")]);
        let geom = GraphPlot::new()
            .graph(g)
            .layout_fn(circular)
            .geometry()
            .expect("geometry");

        // Two nodes on the unit circle: (1, 0) and (-1, 0).
        assert!((geom.node_x[0] - 1.0).abs() < 1e-10);
        assert!((geom.node_x[1] + 1.0).abs() < 1e-10);
    }

    #[test]
    fn custom_layout_errors_propagate() {
        let g = from_edges(&[], &[("A", "B")]);
        let plot = GraphPlot::new()
            .graph(g)
            .layout_fn(|_: &Graph| Ok(Positions::new()));

        assert_eq!(
            plot.geometry(),
            Err(Error::IncompleteLayout {
                node: "A".to_string()
            })
        );
    }

    #[test]
    fn figure_embeds_both_traces_and_the_colorbar() {
        let g = from_edges(&[], &[("A", "B"), ("B", "C")]);
        let plot = GraphPlot::new()
            .graph(g)
            .layout_fn(circular)
            .figure()
            .expect("figure");

        let html = plot.to_inline_html(Some("netplot-test"));
        assert!(html.contains("lines"), "edge trace missing");
        assert!(html.contains("markers"), "node trace missing");
        assert!(html.contains("Closeness"), "colorbar title missing");
    }
}
