//! Network analysis display formatting
//!
//! Prints the adjacency matrix, node degrees and LU factors as tables.

use ndarray::Array2;
use tabled::{builder::Builder, settings::Style};

use crate::network::NetworkAnalysis;

/// Render rows under a header of column indices, with row indices on the left
fn indexed_table<F>(size: usize, cell: F) -> String
where
    F: Fn(usize, usize) -> String,
{
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend((0..size).map(|j| j.to_string()));
    builder.push_record(header);

    for i in 0..size {
        let mut row = vec![i.to_string()];
        row.extend((0..size).map(|j| cell(i, j)));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format a factor matrix with fixed precision, avoiding "-0.00"
pub fn format_factor(matrix: &Array2<f64>, precision: usize) -> String {
    indexed_table(matrix.nrows(), |i, j| {
        let value = matrix[[i, j]];
        let value = if value.abs() < 0.5 * 10f64.powi(-(precision as i32)) {
            0.0
        } else {
            value
        };
        format!("{:.*}", precision, value)
    })
}

/// Matrix, degrees and LU factors, in the order the analysis produced them
pub fn format_network_analysis(analysis: &NetworkAnalysis) -> String {
    let matrix = &analysis.matrix;
    let mut output = String::new();

    output.push_str(&format!(
        "Adjacency matrix ({} nodes):\n",
        analysis.node_count()
    ));
    output.push_str(&indexed_table(matrix.size(), |i, j| {
        matrix.get(i, j).to_string()
    }));
    output.push_str("\n\n");

    output.push_str("Node degrees:\n");
    for (node, degree) in analysis.degrees.iter().enumerate() {
        output.push_str(&format!("  Node {}: {}\n", node, degree));
    }
    output.push('\n');

    output.push_str("LU decomposition (P·A = L·U):\n");
    output.push_str("P =\n");
    output.push_str(&format_factor(&analysis.lu.p, 0));
    output.push_str("\nL =\n");
    output.push_str(&format_factor(&analysis.lu.l, 2));
    output.push_str("\nU =\n");
    output.push_str(&format_factor(&analysis.lu.u, 2));
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{AdjacencyMatrix, NetworkAnalyzer};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_analysis_sections_in_order() {
        let matrix = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 1],
            vec![1, 0, 0],
            vec![0, 1, 0],
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let analysis = NetworkAnalyzer::new(3).analyze(matrix, &mut rng).unwrap();
        let output = format_network_analysis(&analysis);

        let sections = ["Adjacency matrix (3 nodes)", "Node degrees", "P =", "L =", "U ="];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| output.find(s).unwrap_or_else(|| panic!("missing {}", s)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(output.contains("Node 0: 2"));
        assert!(output.contains("Node 1: 1"));
        assert!(output.contains("Node 2: 1"));
    }

    #[test]
    fn test_factor_formatting() {
        let m = ndarray::array![[1.0, -0.0001], [0.5, 2.0]];
        let output = format_factor(&m, 2);

        assert!(output.contains("1.00"));
        assert!(output.contains("0.50"));
        assert!(output.contains("2.00"));
        assert!(!output.contains("-0.00"));
    }
}
