//! Adjacency matrix of the demo network
//!
//! [`AdjacencyMatrix`] holds the 0/1 connection pattern as an `ndarray`
//! matrix and converts it into the `f64` matrix the LU factorization works on
//! and the undirected `petgraph` graph the layout works on.

use std::fmt;

use ndarray::{Array2, ArrayView1, Axis};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;

use crate::error::{TaxnetError, TaxnetResult};

/// Square 0/1 matrix with a zero diagonal
///
/// `cells[[i, j]] == 1` means node `i` has a link to node `j`. The matrix is
/// not required to be symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    cells: Array2<u8>,
}

impl AdjacencyMatrix {
    /// A matrix with no links
    pub fn zero(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    /// Draw every off-diagonal cell uniformly from {0, 1}
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let cells = Array2::from_shape_fn((size, size), |(i, j)| {
            if i == j {
                0
            } else {
                rng.gen_range(0..=1)
            }
        });
        Self { cells }
    }

    /// Build a matrix from rows, checking shape, entries and diagonal
    pub fn from_rows(rows: &[Vec<u8>]) -> TaxnetResult<Self> {
        let size = rows.len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(TaxnetError::Validation(format!(
                    "adjacency matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(TaxnetError::Validation(format!(
                        "adjacency entry ({}, {}) must be 0 or 1, got {}",
                        i, j, value
                    )));
                }
                if i == j && value != 0 {
                    return Err(TaxnetError::Validation(format!(
                        "node {} cannot link to itself",
                        i
                    )));
                }
            }
        }

        let cells = Array2::from_shape_vec((size, size), rows.concat())
            .map_err(|e| TaxnetError::Validation(e.to_string()))?;
        Ok(Self { cells })
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[[row, col]]
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u8> {
        self.cells.row(i)
    }

    /// Degree of each node: the sum of its row
    pub fn degrees(&self) -> Vec<u32> {
        self.cells.mapv(u32::from).sum_axis(Axis(1)).to_vec()
    }

    pub fn is_symmetric(&self) -> bool {
        self.cells == self.cells.t()
    }

    /// Convert to a dense floating-point matrix
    pub fn to_f64(&self) -> Array2<f64> {
        self.cells.mapv(f64::from)
    }

    /// Undirected graph with one node per row, weighted by its index
    ///
    /// Nodes `i < j` share one edge when either direction is set.
    pub fn to_graph(&self) -> UnGraph<usize, ()> {
        let size = self.size();
        let mut graph = UnGraph::with_capacity(size, size);
        let nodes: Vec<NodeIndex> = (0..size).map(|i| graph.add_node(i)).collect();

        for i in 0..size {
            for j in (i + 1)..size {
                if self.get(i, j) == 1 || self.get(j, i) == 1 {
                    graph.add_edge(nodes[i], nodes[j], ());
                }
            }
        }
        graph
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let row: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "[{}]", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_matrix_shape_and_diagonal() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for size in [1, 2, 5, 9] {
            let m = AdjacencyMatrix::random(size, &mut rng);
            assert_eq!(m.size(), size);
            for i in 0..size {
                assert_eq!(m.get(i, i), 0);
                assert!(m.row(i).iter().all(|&v| v <= 1));
            }
        }
    }

    #[test]
    fn test_random_is_reproducible_for_a_seed() {
        let a = AdjacencyMatrix::random(5, &mut ChaCha8Rng::seed_from_u64(42));
        let b = AdjacencyMatrix::random(5, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degrees_are_row_sums() {
        let m = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 1],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(m.degrees(), vec![2, 1, 0]);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let random = AdjacencyMatrix::random(6, &mut rng);
        let sums: Vec<u32> = (0..6)
            .map(|i| random.row(i).iter().map(|&v| v as u32).sum())
            .collect();
        assert_eq!(random.degrees(), sums);
    }

    #[test]
    fn test_zero_matrix_degrees() {
        assert_eq!(AdjacencyMatrix::zero(4).degrees(), vec![0, 0, 0, 0]);
        let graph = AdjacencyMatrix::zero(4).to_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_graph_merges_directions() {
        let m = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![1, 0, 0],
        ])
        .unwrap();
        let graph = m.to_graph();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
        assert!(graph.contains_edge(NodeIndex::new(2), NodeIndex::new(0)));
        assert!(!graph.contains_edge(NodeIndex::new(1), NodeIndex::new(2)));
        assert_eq!(graph[NodeIndex::new(2)], 2);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_from_rows_validation() {
        assert!(AdjacencyMatrix::from_rows(&[vec![0, 1], vec![0]]).is_err());
        assert!(AdjacencyMatrix::from_rows(&[vec![0, 2], vec![0, 0]]).is_err());
        assert!(AdjacencyMatrix::from_rows(&[vec![1, 0], vec![0, 0]]).is_err());
        assert!(AdjacencyMatrix::from_rows(&[]).unwrap().degrees().is_empty());
    }

    #[test]
    fn test_to_f64_keeps_pattern() {
        let m = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(m.to_f64(), ndarray::array![[0.0, 1.0], [1.0, 0.0]]);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_display() {
        let m = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(m.to_string(), "[0 1]\n[0 0]\n");
    }
}
