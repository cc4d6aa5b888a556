//! LU factorization with partial pivoting
//!
//! Produces `P`, `L`, `U` with `P * A = L * U`, `L` unit lower triangular and
//! `U` upper triangular. Columns without a usable pivot are skipped, so
//! singular matrices (including the zero matrix) still factor.

use ndarray::{s, Array2};
use tracing::debug;

use crate::error::{TaxnetError, TaxnetResult};

/// Pivots smaller than this are treated as zero
const PIVOT_EPSILON: f64 = 1e-12;

/// The three factors of an LU decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    /// Row permutation matrix
    pub p: Array2<f64>,
    /// Unit lower triangular factor
    pub l: Array2<f64>,
    /// Upper triangular factor
    pub u: Array2<f64>,
    /// `permutation[i]` is the row of `A` that ended up in row `i`
    pub permutation: Vec<usize>,
}

impl LuDecomposition {
    /// Factor `a` using Doolittle elimination with partial pivoting
    pub fn factorize(a: &Array2<f64>) -> TaxnetResult<Self> {
        if !a.is_square() {
            return Err(TaxnetError::Validation(format!(
                "LU factorization needs a square matrix, got {}x{}",
                a.nrows(),
                a.ncols()
            )));
        }

        let n = a.nrows();
        let mut u = a.clone();
        let mut l = Array2::<f64>::zeros((n, n));
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut skipped = 0usize;

        for k in 0..n {
            // Largest magnitude in column k at or below the diagonal
            let pivot_row = (k..n).fold(k, |best, i| {
                if u[[i, k]].abs() > u[[best, k]].abs() {
                    i
                } else {
                    best
                }
            });

            if pivot_row != k {
                swap_rows(&mut u, k, pivot_row);
                swap_rows(&mut l, k, pivot_row);
                permutation.swap(k, pivot_row);
            }

            let pivot = u[[k, k]];
            if pivot.abs() < PIVOT_EPSILON {
                // Whole column is numerically zero below the diagonal
                u.slice_mut(s![k.., k]).fill(0.0);
                skipped += 1;
                continue;
            }

            let pivot_tail = u.slice(s![k, k..]).to_owned();
            for i in (k + 1)..n {
                let factor = u[[i, k]] / pivot;
                l[[i, k]] = factor;
                u.slice_mut(s![i, k..]).scaled_add(-factor, &pivot_tail);
                u[[i, k]] = 0.0;
            }
        }

        l.diag_mut().fill(1.0);

        let mut p = Array2::<f64>::zeros((n, n));
        for (row, &source) in permutation.iter().enumerate() {
            p[[row, source]] = 1.0;
        }

        debug!(dimension = n, skipped_pivots = skipped, "LU factorization complete");

        Ok(Self { p, l, u, permutation })
    }

    /// Largest entry-wise gap between `P * A` and `L * U`
    pub fn residual(&self, a: &Array2<f64>) -> TaxnetResult<f64> {
        if a.dim() != self.p.dim() {
            return Err(TaxnetError::Validation(format!(
                "factors are {}x{} but the matrix is {}x{}",
                self.p.nrows(),
                self.p.ncols(),
                a.nrows(),
                a.ncols()
            )));
        }
        let gap = self.p.dot(a) - self.l.dot(&self.u);
        Ok(gap.iter().fold(0.0, |max, v| v.abs().max(max)))
    }

    /// Product of U's diagonal, signed by the permutation parity
    pub fn determinant(&self) -> f64 {
        let diagonal = self.u.diag().product();
        if permutation_is_odd(&self.permutation) {
            -diagonal
        } else {
            diagonal
        }
    }
}

fn swap_rows(m: &mut Array2<f64>, a: usize, b: usize) {
    for col in 0..m.ncols() {
        m.swap([a, col], [b, col]);
    }
}

fn permutation_is_odd(permutation: &[usize]) -> bool {
    let mut seen = vec![false; permutation.len()];
    let mut transpositions = 0;
    for start in 0..permutation.len() {
        if seen[start] {
            continue;
        }
        let mut cycle_len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = permutation[i];
            cycle_len += 1;
        }
        transpositions += cycle_len - 1;
    }
    transpositions % 2 == 1
}
