//! Pluggable 2D layout functions.
//!
//! # Overview
//!
//! A layout function maps a graph to a [`Positions`] table holding one
//! `(x, y)` coordinate per node. Anything with the signature
//! `Fn(&Graph) -> Result<Positions>` can be plugged into
//! [`crate::GraphPlot::layout_fn`]; this module ships two built-ins:
//!
//! - [`kamada_kawai`] — force-directed spring layout (the default).
//! - [`circular`] — nodes evenly spaced on a unit circle.
//!
//! Both are deterministic: the same graph always yields the same positions,
//! so repeated renders of one graph are pixel-identical.

pub mod circular;
pub mod kamada_kawai;

pub use circular::circular;
pub use kamada_kawai::{KamadaKawaiConfig, kamada_kawai};
