//! Conjugate gradient iteration for symmetric linear systems.

use crate::{Result, SolverError};
use frontier_matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Conjugate gradient solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgConfig {
    /// Convergence threshold on the squared residual norm (default: 1e-6).
    pub tolerance: f64,

    /// Iteration cap; exhausting it is not an error, the best-effort
    /// estimate is returned (default: 1_000_000).
    pub max_iterations: usize,
}

impl Default for CgConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1_000_000,
        }
    }
}

/// Outcome of a conjugate gradient run.
#[derive(Debug, Clone, PartialEq)]
pub struct CgSolution {
    /// Solution estimate, an `n x 1` vector.
    pub x: Matrix,

    /// Number of iterations performed.
    pub iterations: usize,

    /// Whether the squared residual norm fell to or below the tolerance.
    /// `false` means the iteration cap was exhausted first.
    pub converged: bool,
}

/// Iterative solver for `Q x = b` with symmetric `Q`.
///
/// Positive semi-definiteness is assumed, not verified; on an indefinite
/// system the iteration can wander or hit a degenerate direction.
#[derive(Debug, Clone, Default)]
pub struct CgSolver {
    config: CgConfig,
}

impl CgSolver {
    /// Create a solver with the given configuration.
    pub const fn new(config: CgConfig) -> Self {
        Self { config }
    }

    /// Solver configuration.
    pub const fn config(&self) -> &CgConfig {
        &self.config
    }

    /// Solve `Q x = b` starting from the initial guess `x0`.
    ///
    /// Standard conjugate gradient: residual `s = b - Q x`, search
    /// direction `p`, step `alpha = (s's) / (p'Qp)`, direction update
    /// `p = s + beta p` with `beta` the ratio of consecutive squared
    /// residual norms. Terminates when the squared residual norm reaches
    /// the tolerance or the iteration cap is exhausted; only the latter
    /// leaves `converged` unset in the returned [`CgSolution`].
    ///
    /// # Errors
    /// Returns [`SolverError::DegenerateDirection`] when a step-size
    /// denominator is exactly zero, instead of letting NaN poison the
    /// remaining iterations. Shape mismatches between `q`, `b` and `x0`
    /// surface as matrix errors.
    pub fn solve(&self, q: &Matrix, b: &Matrix, x0: &Matrix) -> Result<CgSolution> {
        let mut x = x0.clone();
        let mut s = b.checked_sub(&q.matmul(&x)?)?;
        let mut p = s.clone();
        let mut rr = s.dot(&s)?;
        let mut iterations = 0;

        while rr > self.config.tolerance && iterations <= self.config.max_iterations {
            let qp = q.matmul(&p)?;
            let pqp = p.dot(&qp)?;
            if pqp == 0.0 {
                return Err(SolverError::DegenerateDirection {
                    iteration: iterations,
                });
            }
            let alpha = rr / pqp;
            x.checked_add_assign(&(alpha * &p))?;
            s.checked_sub_assign(&(alpha * &qp))?;
            let rr_next = s.dot(&s)?;
            if rr == 0.0 {
                return Err(SolverError::DegenerateDirection {
                    iteration: iterations,
                });
            }
            let beta = rr_next / rr;
            p = s.checked_add(&(beta * &p))?;
            rr = rr_next;
            iterations += 1;
        }

        Ok(CgSolution {
            x,
            iterations,
            converged: rr <= self.config.tolerance,
        })
    }
}
