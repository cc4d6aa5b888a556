//! Communication network demo
//!
//! Generates a random adjacency matrix and derives node degrees, an LU
//! factorization and a spring layout of the undirected `petgraph` graph. Every run
//! starts from a fresh matrix; nothing is cached between runs.

pub mod layout;
pub mod lu;
pub mod matrix;

pub use layout::{GraphLayout, SpringLayoutConfig};
pub use lu::LuDecomposition;
pub use matrix::AdjacencyMatrix;

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::Rng;
use tracing::debug;

use crate::error::TaxnetResult;

/// Node count used when nothing else is configured
pub const DEFAULT_NODE_COUNT: usize = 5;

/// Everything derived from one generated matrix
#[derive(Debug, Clone)]
pub struct NetworkAnalysis {
    pub matrix: AdjacencyMatrix,
    /// Row sums of the matrix
    pub degrees: Vec<u32>,
    pub lu: LuDecomposition,
    /// Undirected view of the matrix; node weights are matrix indices
    pub graph: UnGraph<usize, ()>,
    pub layout: GraphLayout,
}

impl NetworkAnalysis {
    pub fn node_count(&self) -> usize {
        self.matrix.size()
    }

    /// Undirected edges `(i, j)`, `i < j`, in matrix order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
            .collect()
    }
}

/// Runs the four analysis steps for networks of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct NetworkAnalyzer {
    nodes: usize,
    layout: SpringLayoutConfig,
}

impl NetworkAnalyzer {
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            layout: SpringLayoutConfig::default(),
        }
    }

    pub fn with_layout(mut self, layout: SpringLayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Generate a fresh random matrix and analyze it
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> TaxnetResult<NetworkAnalysis> {
        let matrix = AdjacencyMatrix::random(self.nodes, rng);
        self.analyze(matrix, rng)
    }

    /// Analyze a given matrix; `rng` seeds the layout's starting positions
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        matrix: AdjacencyMatrix,
        rng: &mut R,
    ) -> TaxnetResult<NetworkAnalysis> {
        let degrees = matrix.degrees();
        let lu = LuDecomposition::factorize(&matrix.to_f64())?;
        let graph = matrix.to_graph();
        let layout = GraphLayout::spring(&graph, self.layout, rng);

        debug!(
            nodes = matrix.size(),
            edges = graph.edge_count(),
            symmetric = matrix.is_symmetric(),
            "network analysis complete"
        );

        Ok(NetworkAnalysis {
            matrix,
            degrees,
            lu,
            graph,
            layout,
        })
    }
}

impl Default for NetworkAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_run_has_five_nodes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let analysis = NetworkAnalyzer::default().run(&mut rng).unwrap();

        assert_eq!(analysis.node_count(), 5);
        assert_eq!(analysis.degrees, analysis.matrix.degrees());
        assert_eq!(analysis.graph.node_count(), 5);
        assert_eq!(analysis.layout.len(), 5);
        assert!(analysis.lu.residual(&analysis.matrix.to_f64()).unwrap() < 1e-9);
    }

    #[test]
    fn test_each_run_draws_a_new_matrix() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let analyzer = NetworkAnalyzer::new(6);
        let runs: Vec<_> = (0..5).map(|_| analyzer.run(&mut rng).unwrap().matrix).collect();
        assert!(runs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_zero_matrix_analysis() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let analysis = NetworkAnalyzer::new(4)
            .analyze(AdjacencyMatrix::zero(4), &mut rng)
            .unwrap();

        assert_eq!(analysis.degrees, vec![0, 0, 0, 0]);
        assert!(analysis.edges().is_empty());
        assert_eq!(analysis.lu.u, ndarray::Array2::<f64>::zeros((4, 4)));
    }

    #[test]
    fn test_edges_come_from_the_graph() {
        let matrix = AdjacencyMatrix::from_rows(&[
            vec![0, 0, 1],
            vec![1, 0, 0],
            vec![0, 1, 0],
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let analysis = NetworkAnalyzer::new(3).analyze(matrix, &mut rng).unwrap();

        assert_eq!(analysis.edges(), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(analysis.graph.edge_count(), 3);
    }
}
