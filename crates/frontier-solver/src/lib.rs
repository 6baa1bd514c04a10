#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/frontier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod cg;

pub use assemble::assemble_kkt;
pub use cg::{CgConfig, CgSolution, CgSolver};

use frontier_matrix::MatrixError;
use thiserror::Error;

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors that can occur during system assembly and solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A zero denominator appeared in a step-size quotient mid-iteration.
    ///
    /// Surfaced as an error rather than letting NaN propagate through the
    /// remaining iterations.
    #[error("degenerate search direction at iteration {iteration}")]
    DegenerateDirection {
        /// Iteration at which the zero denominator appeared
        iteration: usize,
    },

    /// Underlying matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
