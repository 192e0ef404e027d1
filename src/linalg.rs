//! Dense solves for the normal equations.

use ndarray::{Axis, s};

use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Pivots smaller than this fraction of their row's largest original entry
/// are treated as zero.
const RELATIVE_PIVOT_TOLERANCE: f64 = 1e-12;

/// Solves `a · x = b` by Gaussian elimination with scaled partial pivoting.
///
/// Each row is measured against its own largest entry, so rows of very
/// different magnitude neither hide nor fake a zero pivot.
pub fn solve(a: &Matrix, b: &Vector) -> Result<Vector> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(RegressionError::mismatch("square system", n, a.ncols()));
    }
    if b.len() != n {
        return Err(RegressionError::mismatch("right-hand side", n, b.len()));
    }

    let mut row_scale: Vec<f64> = a
        .rows()
        .into_iter()
        .map(|row| row.fold(0.0_f64, |m, v| m.max(v.abs())))
        .collect();
    if row_scale.iter().any(|&s| s == 0.0) {
        return Err(RegressionError::SingularMatrix);
    }

    let mut aug = Matrix::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    for i in 0..n {
        let max_row = (i..n)
            .max_by(|&p, &q| {
                let lhs = aug[(p, i)].abs() / row_scale[p];
                let rhs = aug[(q, i)].abs() / row_scale[q];
                lhs.total_cmp(&rhs)
            })
            .unwrap_or(i);

        if aug[(max_row, i)].abs() <= row_scale[max_row] * RELATIVE_PIVOT_TOLERANCE {
            return Err(RegressionError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                aug.swap((i, j), (max_row, j));
            }
            row_scale.swap(i, max_row);
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            if factor == 0.0 {
                continue;
            }
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let tail = aug.slice(s![i, (i + 1)..n]).dot(&x.slice(s![(i + 1)..]));
        x[i] = (aug[(i, n)] - tail) / aug[(i, i)];
    }

    Ok(x)
}

/// Solves the symmetric system `gram · β = rhs` after scaling it to a unit
/// diagonal, then maps the solution back to the original scale.
pub fn solve_gram(gram: &Matrix, rhs: &Vector) -> Result<Vector> {
    let scale = gram
        .diag()
        .mapv(|d| if d > 0.0 { d.sqrt().recip() } else { 1.0 });

    let mut scaled = gram.clone();
    for ((i, j), v) in scaled.indexed_iter_mut() {
        *v *= scale[i] * scale[j];
    }
    let z = solve(&scaled, &(rhs * &scale))?;
    Ok(z * &scale)
}

/// Solves `(xᵀx + alpha·I) β = xᵀy`.
pub fn solve_normal_equations(x: &Matrix, y: &Vector, alpha: f64) -> Result<Vector> {
    let mut gram = x.t().dot(x);
    gram.diag_mut().mapv_inplace(|d| d + alpha);
    let rhs = x.t().dot(y);
    solve_gram(&gram, &rhs)
}

/// Column means of `x` and the centered copy of `x`.
pub fn center_columns(x: &Matrix) -> (Vector, Matrix) {
    let means = x
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Vector::zeros(x.ncols()));
    let centered = x - &means;
    (means, centered)
}
