//! Force-directed (spring) graph layout
//!
//! Fruchterman-Reingold: every pair of nodes repels with `k^2 / d`, linked
//! nodes attract with `d^2 / k`, and each step moves a node by at most the
//! current temperature. The temperature cools linearly to zero. Positions are
//! finally centred and scaled into `[-1, 1]`.

use ndarray::Array2;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::Rng;
use tracing::debug;

/// Spring layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringLayoutConfig {
    /// Maximum number of cooling steps
    pub iterations: usize,
    /// Stop once the mean node displacement drops below this
    pub threshold: f64,
}

impl Default for SpringLayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            threshold: 1e-4,
        }
    }
}

/// A 2-D position per node
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLayout {
    pub positions: Vec<(f64, f64)>,
}

impl GraphLayout {
    /// Compute a spring layout with one position per node of `graph`
    pub fn spring<R: Rng + ?Sized>(
        graph: &UnGraph<usize, ()>,
        config: SpringLayoutConfig,
        rng: &mut R,
    ) -> Self {
        let node_count = graph.node_count();
        match node_count {
            0 => return Self { positions: Vec::new() },
            1 => return Self { positions: vec![(0.0, 0.0)] },
            _ => {}
        }

        let mut linked = Array2::from_elem((node_count, node_count), false);
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            if a != b {
                linked[[a, b]] = true;
                linked[[b, a]] = true;
            }
        }

        let mut pos: Vec<(f64, f64)> = (0..node_count)
            .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();

        let k = (1.0 / node_count as f64).sqrt();
        let mut temperature = spread(&pos) * 0.1;
        let cooling = temperature / (config.iterations as f64 + 1.0);
        let mut steps = 0;

        for _ in 0..config.iterations {
            steps += 1;
            let mut total_shift = 0.0;
            let mut next = pos.clone();

            for i in 0..node_count {
                let (mut dx, mut dy) = (0.0, 0.0);
                for j in 0..node_count {
                    if i == j {
                        continue;
                    }
                    let delta_x = pos[i].0 - pos[j].0;
                    let delta_y = pos[i].1 - pos[j].1;
                    let distance = (delta_x * delta_x + delta_y * delta_y).sqrt().max(0.01);
                    let attraction = if linked[[i, j]] {
                        distance / k
                    } else {
                        0.0
                    };
                    let force = k * k / (distance * distance) - attraction;
                    dx += delta_x * force;
                    dy += delta_y * force;
                }

                let length = (dx * dx + dy * dy).sqrt().max(0.01);
                let shift_x = dx * temperature / length;
                let shift_y = dy * temperature / length;
                next[i] = (pos[i].0 + shift_x, pos[i].1 + shift_y);
                total_shift += (shift_x * shift_x + shift_y * shift_y).sqrt();
            }

            pos = next;
            temperature -= cooling;
            if total_shift / (node_count as f64) < config.threshold {
                break;
            }
        }

        debug!(
            nodes = node_count,
            edges = graph.edge_count(),
            steps,
            "spring layout complete"
        );

        Self {
            positions: rescale(pos),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Euclidean distance between two nodes
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let (ax, ay) = self.positions[a];
        let (bx, by) = self.positions[b];
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }
}

/// Largest extent along either axis
fn spread(pos: &[(f64, f64)]) -> f64 {
    let extent = |values: Vec<f64>| {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        max - min
    };
    let xs = extent(pos.iter().map(|p| p.0).collect());
    let ys = extent(pos.iter().map(|p| p.1).collect());
    xs.max(ys)
}

/// Centre on the mean and scale so the farthest coordinate is 1
fn rescale(mut pos: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p.1).sum::<f64>() / n;

    for p in pos.iter_mut() {
        p.0 -= mean_x;
        p.1 -= mean_y;
    }

    let max = pos
        .iter()
        .map(|p| p.0.abs().max(p.1.abs()))
        .fold(0.0, f64::max);
    if max > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= max;
            p.1 /= max;
        }
    }
    pos
}
