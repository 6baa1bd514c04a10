#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/frontier/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod backtest;

// Re-export main types from sub-crates
pub use frontier_data as data;
pub use frontier_matrix as matrix;
pub use frontier_solver as solver;
pub use frontier_stats as stats;

pub use backtest::{BacktestConfig, BacktestError, BacktestReport, run, run_with_progress};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
