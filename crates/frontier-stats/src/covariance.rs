//! Unbiased sample covariance over a window of observations.

use crate::moments::mean;
use crate::{Result, StatsError};
use frontier_matrix::Matrix;

/// Sample covariance matrix of the `window` consecutive observation rows
/// starting at `offset`.
///
/// For an `n x k` observation matrix the result is `k x k` with
/// `cov[(i, j)]` the centered cross-product of columns `i` and `j` over the
/// window, divided by the unbiased `window - 1`. Both triangles are computed
/// in full rather than mirrored, so the result is symmetric to the last bit
/// by construction.
///
/// # Arguments
/// * `observations` - `n x k` matrix, rows are observations
/// * `window` - number of consecutive rows to cover, at least 2
/// * `offset` - index of the first row of the window
///
/// # Errors
/// Returns [`StatsError::WindowTooShort`] for `window < 2` and a matrix
/// error if the window reaches past the last row.
pub fn covariance(observations: &Matrix, window: usize, offset: usize) -> Result<Matrix> {
    if window < 2 {
        return Err(StatsError::WindowTooShort {
            window,
            required: 2,
        });
    }
    let block = observations.slice(offset, offset + window, 0, observations.cols())?;
    let means = mean(&block)?;
    let k = block.cols();

    let mut centered = Vec::with_capacity(k);
    for j in 0..k {
        centered.push(block.column(j)? - means.get(0, j)?);
    }

    let mut cov = Matrix::zeros(k, k);
    for i in 0..k {
        for j in 0..k {
            cov.set(i, j, centered[i].dot(&centered[j])?)?;
        }
    }
    Ok(cov / (window as f64 - 1.0))
}
