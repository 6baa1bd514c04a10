//! Rolling-window mean-variance backtest engine.
//!
//! Drives the whole pipeline: for each in-sample window, estimate moments,
//! assemble the KKT system, sweep the target-return list through the
//! conjugate gradient solver and score the resulting portfolios on the
//! held-out out-of-sample block.

use frontier_matrix::{Matrix, MatrixError};
use frontier_solver::{CgConfig, CgSolver, SolverError, assemble_kkt};
use frontier_stats::{StatsError, covariance, mean};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for backtest runs.
pub type Result<T> = std::result::Result<T, BacktestError>;

/// Errors that can abort a backtest run.
#[derive(Debug, Error)]
pub enum BacktestError {
    /// Configuration rejected before any window was computed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Not enough observation rows for a single window plus its
    /// out-of-sample block.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations
        required: usize,
        /// Actual number of observations
        actual: usize,
    },

    /// Statistical aggregation failed.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Solver failed.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Backtest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// In-sample window length in observation rows (default: 100).
    pub window: usize,

    /// Stride between windows; also the length of the held-out
    /// out-of-sample block (default: 12).
    pub step: usize,

    /// Target-return sweep, one solved portfolio per entry per window
    /// (default: 0.005 to 0.100 in steps of 0.005).
    pub targets: Vec<f64>,

    /// Conjugate gradient settings.
    pub solver: CgConfig,

    /// Seed for the solver's random starting points. `None` seeds from
    /// process entropy; fixing it makes runs reproducible.
    pub seed: Option<u64>,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            window: 100,
            step: 12,
            targets: (1..=20).map(|i| f64::from(i) * 0.005).collect(),
            solver: CgConfig::default(),
            seed: None,
        }
    }
}

impl BacktestConfig {
    /// Number of rolling windows a matrix of `n_obs` rows yields under
    /// this configuration.
    pub const fn num_windows(&self, n_obs: usize) -> usize {
        if self.window + self.step > n_obs {
            0
        } else {
            (n_obs - self.window - self.step) / self.step + 1
        }
    }

    fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(BacktestError::InvalidConfig(format!(
                "in-sample window must cover at least 2 observations, got {}",
                self.window
            )));
        }
        if self.step < 2 {
            return Err(BacktestError::InvalidConfig(format!(
                "step must cover at least 2 observations for the out-of-sample covariance, got {}",
                self.step
            )));
        }
        if self.targets.is_empty() {
            return Err(BacktestError::InvalidConfig(
                "target-return list is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Out-of-sample results of a backtest run.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestReport {
    /// Realized out-of-sample portfolio mean returns, one row per window,
    /// one column per target.
    pub port_means: Matrix,

    /// Realized out-of-sample portfolio variances, same shape.
    pub port_vars: Matrix,

    /// Total conjugate gradient iterations spent per window.
    pub solver_iterations: Vec<usize>,
}

impl BacktestReport {
    /// Number of rolling windows covered.
    pub const fn windows(&self) -> usize {
        self.port_means.rows()
    }
}

/// Run the rolling backtest over a matrix of asset returns.
///
/// `returns` is `n_obs x n_assets`, rows in time order. Each window
/// `[beg, beg + window)` is scored against the following
/// `[beg + window, beg + window + step)` block; windows advance by `step`.
///
/// # Errors
/// Configuration and data-shape problems are rejected up front; any core
/// error mid-run (aggregation, assembly, solving) aborts the whole run and
/// propagates.
pub fn run(returns: &Matrix, config: &BacktestConfig) -> Result<BacktestReport> {
    run_with_progress(returns, config, |_| {})
}

/// [`run`] with a callback invoked after each completed window, for
/// progress reporting. The callback receives the index of the window just
/// finished.
pub fn run_with_progress(
    returns: &Matrix,
    config: &BacktestConfig,
    mut on_window: impl FnMut(usize),
) -> Result<BacktestReport> {
    config.validate()?;
    let n_assets = returns.cols();
    let n_obs = returns.rows();
    if config.num_windows(n_obs) == 0 {
        return Err(BacktestError::InsufficientData {
            required: config.window + config.step,
            actual: n_obs,
        });
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let solver = CgSolver::new(config.solver);
    let ones = Matrix::from_vec(vec![1.0; n_assets], n_assets, 1)?;

    // Right-hand side: -target at row k, -1 at row k+1, zero elsewhere,
    // matching the negated border vectors of the KKT matrix.
    let mut b = Matrix::zeros(n_assets + 2, 1);
    b.set(n_assets + 1, 0, -1.0)?;

    let mut port_means = Matrix::default();
    let mut port_vars = Matrix::default();
    let mut solver_iterations = Vec::new();

    let mut beg = 0;
    let mut window_idx = 0;
    while beg + config.window + config.step <= n_obs {
        let end = beg + config.window;
        let insample = returns.slice(beg, end, 0, n_assets)?;
        let insample_cov = covariance(&insample, config.window, 0)?;
        let insample_mean = mean(&insample)?.transpose();

        let oos = returns.slice(end, end + config.step, 0, n_assets)?;
        let oos_cov = covariance(&oos, config.step, 0)?;
        let oos_mean = mean(&oos)?.transpose();

        let q = assemble_kkt(&insample_cov, &(-&insample_mean), &(-&ones))?;

        let mut means_row = Matrix::zeros(1, config.targets.len());
        let mut vars_row = Matrix::zeros(1, config.targets.len());
        let mut iterations = 0;
        for (t, &target) in config.targets.iter().enumerate() {
            b.set(n_assets, 0, -target)?;
            let x0 = Matrix::random_uniform(n_assets + 2, 1, &mut rng);
            let solution = solver.solve(&q, &b, &x0)?;
            let weights = solution.x.slice(0, n_assets, 0, 1)?;
            iterations += solution.iterations;

            means_row.set(0, t, oos_mean.dot(&weights)?)?;
            vars_row.set(0, t, weights.dot(&oos_cov.matmul(&weights)?)?)?;
        }
        port_means.append_rows(&means_row)?;
        port_vars.append_rows(&vars_row)?;
        solver_iterations.push(iterations);

        on_window(window_idx);
        window_idx += 1;
        beg += config.step;
    }

    Ok(BacktestReport {
        port_means,
        port_vars,
        solver_iterations,
    })
}
