//! Kamada–Kawai force-directed layout.
//!
//! # Overview
//!
//! Kamada & Kawai (1989) model the graph as a spring system: every node
//! pair gets a spring whose rest length is proportional to their
//! graph-theoretic distance, and the layout is the configuration minimizing
//! the total spring energy
//!
//! ```text
//! E = Σ_{i<j} ½ · k_ij · (|p_i − p_j| − l_ij)²
//! ```
//!
//! # Algorithm
//!
//! 1. All-pairs BFS distances (the graph is unweighted). Unreachable pairs
//!    are clamped to `n`, an upper bound on any finite distance, so
//!    disconnected graphs still lay out with components pushed apart.
//! 2. Ideal lengths `l_ij = d_ij / max(d)` and spring strengths
//!    `k_ij = 1 / d_ij²` (closer pairs are stiffer).
//! 3. Deterministic start: nodes on the unit circle in iteration order.
//! 4. Repeatedly pick the node with the largest energy gradient and move it
//!    with 2D Newton–Raphson steps until the maximum gradient norm drops
//!    below tolerance or the iteration cap is hit.
//!
//! The solver is entirely deterministic — no random restarts — so repeated
//! calls on the same graph produce identical positions.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::graph::{Graph, Positions};
use crate::layout::circular;

/// Tuning knobs for the Kamada–Kawai solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KamadaKawaiConfig {
    /// Cap on outer iterations (node relocations).
    pub max_iter: usize,
    /// Convergence threshold on the gradient norm.
    pub tolerance: f64,
}

impl Default for KamadaKawaiConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }
}

/// Compute a Kamada–Kawai layout with default configuration.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] for a graph with no nodes.
pub fn kamada_kawai(graph: &Graph) -> Result<Positions> {
    kamada_kawai_with(graph, KamadaKawaiConfig::default())
}

/// Compute a Kamada–Kawai layout with explicit configuration.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`] for a graph with no nodes.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
#[allow(clippy::cast_precision_loss, clippy::similar_names)]
pub fn kamada_kawai_with(graph: &Graph, config: KamadaKawaiConfig) -> Result<Positions> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    if n == 1 {
        return circular(graph);
    }

    let dist = all_pairs_bfs(graph);

    let max_dist = dist
        .iter()
        .flatten()
        .copied()
        .fold(1.0_f64, f64::max);

    // Ideal spring lengths scaled so the drawing fits a unit-ish box, and
    // spring strengths favoring short-range accuracy.
    let mut length = vec![vec![0.0; n]; n];
    let mut strength = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                length[i][j] = dist[i][j] / max_dist;
                strength[i][j] = 1.0 / (dist[i][j] * dist[i][j]);
            }
        }
    }

    // Deterministic initial placement on the unit circle.
    let indices: Vec<_> = graph.node_indices().collect();
    let start = circular(graph)?;
    let mut pos: Vec<(f64, f64)> = indices.iter().map(|idx| start[idx]).collect();

    for iter in 0..config.max_iter {
        // Node with the largest gradient norm moves next.
        let (m, grad_norm) = (0..n)
            .map(|i| (i, gradient(i, &pos, &length, &strength).norm()))
            .fold((0, 0.0), |best, cand| if cand.1 > best.1 { cand } else { best });

        if grad_norm < config.tolerance {
            debug!(iterations = iter, "kamada-kawai converged");
            break;
        }

        newton_relax(m, &mut pos, &length, &strength, config.tolerance);
    }

    Ok(indices.into_iter().zip(pos).collect())
}

/// All-pairs shortest-path distances via one BFS per node.
///
/// Unreachable pairs get distance `n` (strictly larger than any finite
/// distance) so the spring model still separates components.
#[allow(clippy::cast_precision_loss)]
fn all_pairs_bfs(graph: &Graph) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let unreachable = n as f64;
    let mut dist = vec![vec![unreachable; n]; n];

    for s in graph.node_indices() {
        let si = s.index();
        dist[si][si] = 0.0;

        let mut seen = vec![false; n];
        seen[si] = true;

        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            let dv = dist[si][v.index()];
            for w in graph.neighbors(v) {
                let wi = w.index();
                if !seen[wi] {
                    seen[wi] = true;
                    dist[si][wi] = dv + 1.0;
                    queue.push_back(w);
                }
            }
        }
    }

    dist
}

#[derive(Debug, Clone, Copy)]
struct Gradient {
    x: f64,
    y: f64,
}

impl Gradient {
    fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Partial derivatives of the spring energy with respect to node `m`.
fn gradient(m: usize, pos: &[(f64, f64)], length: &[Vec<f64>], strength: &[Vec<f64>]) -> Gradient {
    let mut gx = 0.0;
    let mut gy = 0.0;

    for i in 0..pos.len() {
        if i == m {
            continue;
        }
        let dx = pos[m].0 - pos[i].0;
        let dy = pos[m].1 - pos[i].1;
        let d = dx.hypot(dy).max(1e-9);

        gx += strength[m][i] * dx * (1.0 - length[m][i] / d);
        gy += strength[m][i] * dy * (1.0 - length[m][i] / d);
    }

    Gradient { x: gx, y: gy }
}

/// Move node `m` with damped Newton steps until its own gradient is below
/// tolerance (or the step count runs out).
#[allow(clippy::similar_names)]
fn newton_relax(
    m: usize,
    pos: &mut [(f64, f64)],
    length: &[Vec<f64>],
    strength: &[Vec<f64>],
    tolerance: f64,
) {
    // Inner iterations are cheap; 50 is far more than ever needed.
    for _ in 0..50 {
        let g = gradient(m, pos, length, strength);
        if g.norm() < tolerance {
            return;
        }

        // Hessian of the energy restricted to node m.
        let mut hxx = 0.0;
        let mut hxy = 0.0;
        let mut hyy = 0.0;

        for i in 0..pos.len() {
            if i == m {
                continue;
            }
            let dx = pos[m].0 - pos[i].0;
            let dy = pos[m].1 - pos[i].1;
            let d = dx.hypot(dy).max(1e-9);
            let d3 = d * d * d;
            let k = strength[m][i];
            let l = length[m][i];

            hxx += k * (1.0 - l * dy * dy / d3);
            hxy += k * l * dx * dy / d3;
            hyy += k * (1.0 - l * dx * dx / d3);
        }

        let det = hxx * hyy - hxy * hxy;
        if det.abs() < 1e-12 {
            return;
        }

        let step_x = (-g.x * hyy + g.y * hxy) / det;
        let step_y = (-g.y * hxx + g.x * hxy) / det;

        pos[m].0 += step_x;
        pos[m].1 += step_y;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
