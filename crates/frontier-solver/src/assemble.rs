//! Assembly of the augmented KKT matrix.

use crate::Result;
use frontier_matrix::{Matrix, MatrixError};

/// Build the symmetric KKT matrix of the equality-constrained program
///
/// ```text
/// minimize   w' * Cov * w
/// subject to mean' * w = target,  ones' * w = 1
/// ```
///
/// For a `k x k` covariance and two `k x 1` border vectors (negated by the
/// caller to match the sign convention of the right-hand side) the result is
/// `(k + 2) x (k + 2)`: covariance in the top-left block, `mean` mirrored
/// into row/column `k`, `ones` mirrored into row/column `k + 1`, and a zero
/// 2x2 corner. Solving `Q x = b` with the matching right-hand side yields
/// the portfolio weights in the first `k` entries of `x`.
///
/// # Errors
/// Returns a dimension error unless `cov` is square and both border vectors
/// are `k x 1`.
pub fn assemble_kkt(cov: &Matrix, mean: &Matrix, ones: &Matrix) -> Result<Matrix> {
    let k = cov.rows();
    if cov.cols() != k {
        return Err(MatrixError::DimensionMismatch {
            lhs_rows: cov.rows(),
            lhs_cols: cov.cols(),
            rhs_rows: k,
            rhs_cols: k,
        }
        .into());
    }
    for border in [mean, ones] {
        if border.rows() != k || border.cols() != 1 {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: k,
                lhs_cols: k,
                rhs_rows: border.rows(),
                rhs_cols: border.cols(),
            }
            .into());
        }
    }

    let mut q = Matrix::zeros(k + 2, k + 2);
    for i in 0..k {
        for j in 0..k {
            q.set(i, j, cov.get(i, j)?)?;
        }
    }
    for i in 0..k {
        let m = mean.get(i, 0)?;
        q.set(i, k, m)?;
        q.set(k, i, m)?;
        let o = ones.get(i, 0)?;
        q.set(i, k + 1, o)?;
        q.set(k + 1, i, o)?;
    }
    Ok(q)
}
