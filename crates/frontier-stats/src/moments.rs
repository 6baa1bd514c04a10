//! Column-wise means and strided rolling means.

use crate::{Result, StatsError};
use frontier_matrix::Matrix;

/// Column-wise arithmetic mean of an `n x k` observation matrix.
///
/// Rows are observations, columns are variables; the result is `1 x k`.
///
/// # Errors
/// Returns [`StatsError::EmptyObservations`] for a matrix with no rows.
pub fn mean(observations: &Matrix) -> Result<Matrix> {
    if observations.rows() == 0 {
        return Err(StatsError::EmptyObservations);
    }
    let mut sum = Matrix::zeros(1, observations.cols());
    for i in 0..observations.rows() {
        sum.checked_add_assign(&observations.row(i)?)?;
    }
    Ok(sum / observations.rows() as f64)
}

/// Rolling column-wise mean over windows of `window` rows advanced by
/// `step`.
///
/// One output row per admissible window start `b = 0, step, 2*step, ...`
/// while `b + window <= n`; each row is the mean of all `window` rows in
/// `[b, b + window)`. When the matrix holds fewer than `window` rows the
/// global mean is returned instead, a deliberate fallback kept for
/// compatibility with the historical behavior.
///
/// # Errors
/// Returns [`StatsError::WindowTooShort`] for a zero-length window and
/// [`StatsError::ZeroStep`] for a zero step.
pub fn rolling_mean(observations: &Matrix, window: usize, step: usize) -> Result<Matrix> {
    if window == 0 {
        return Err(StatsError::WindowTooShort {
            window,
            required: 1,
        });
    }
    if step == 0 {
        return Err(StatsError::ZeroStep);
    }
    if observations.rows() < window {
        return mean(observations);
    }
    let mut result = Matrix::default();
    let mut beg = 0;
    while beg + window <= observations.rows() {
        let block = observations.slice(beg, beg + window, 0, observations.cols())?;
        result.append_rows(&mean(&block)?)?;
        beg += step;
    }
    Ok(result)
}
