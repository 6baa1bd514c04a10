#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/frontier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod covariance;
pub mod moments;

pub use covariance::covariance;
pub use moments::{mean, rolling_mean};

use frontier_matrix::MatrixError;
use thiserror::Error;

/// Result type for statistical aggregation.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur during statistical aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Mean of an observation matrix with no rows.
    #[error("cannot take the mean of zero observations")]
    EmptyObservations,

    /// Window too short for the requested statistic.
    #[error("window of {window} observations is too short, need at least {required}")]
    WindowTooShort {
        /// Requested window length
        window: usize,
        /// Minimum admissible window length
        required: usize,
    },

    /// Rolling statistics cannot advance with a zero step.
    #[error("rolling step must be positive")]
    ZeroStep,

    /// Underlying matrix operation failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
