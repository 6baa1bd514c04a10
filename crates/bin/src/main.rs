//! Frontier CLI binary.
//!
//! Command-line driver for the rolling mean-variance backtester.

use clap::{Parser, Subcommand};
use frontier::backtest::{self, BacktestConfig};
use frontier::data::{read_returns, write_matrix};
use frontier::solver::CgConfig;
use frontier::stats;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "frontier")]
#[command(about = "Frontier: rolling mean-variance efficient frontier backtester", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the rolling backtest over a returns file
    Run {
        /// Headerless CSV of asset returns, one observation row per line
        returns: PathBuf,

        /// In-sample window length in observations
        #[arg(long, default_value = "100")]
        window: usize,

        /// Window stride, also the out-of-sample block length
        #[arg(long, default_value = "12")]
        step: usize,

        /// Comma-separated target-return sweep
        #[arg(long, value_delimiter = ',', conflicts_with = "target_range")]
        targets: Option<Vec<f64>>,

        /// Target sweep as lo:hi:step, bounds inclusive
        #[arg(long)]
        target_range: Option<String>,

        /// Solver tolerance on the squared residual norm
        #[arg(long, default_value = "1e-6")]
        tolerance: f64,

        /// Solver iteration cap
        #[arg(long, default_value = "1000000")]
        max_iterations: usize,

        /// RNG seed for reproducible runs (omit to seed from entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for out-of-sample portfolio means
        #[arg(long, default_value = "resultMeans.csv")]
        means_out: PathBuf,

        /// Output file for out-of-sample portfolio variances
        #[arg(long, default_value = "resultVars.csv")]
        vars_out: PathBuf,

        /// Skip printing the result matrices to stdout
        #[arg(long)]
        quiet: bool,
    },

    /// Print the shape and column means of a returns file
    Inspect {
        /// Headerless CSV of asset returns
        returns: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            returns,
            window,
            step,
            targets,
            target_range,
            tolerance,
            max_iterations,
            seed,
            means_out,
            vars_out,
            quiet,
        } => {
            let defaults = BacktestConfig::default();
            let targets = match (targets, target_range) {
                (Some(list), _) => list,
                (None, Some(range)) => parse_target_range(&range)?,
                (None, None) => defaults.targets,
            };
            let config = BacktestConfig {
                window,
                step,
                targets,
                solver: CgConfig {
                    tolerance,
                    max_iterations,
                },
                seed,
            };
            run_backtest(&returns, &config, &means_out, &vars_out, quiet)?;
        }
        Commands::Inspect { returns } => inspect(&returns)?,
    }

    Ok(())
}

fn run_backtest(
    returns_path: &Path,
    config: &BacktestConfig,
    means_out: &Path,
    vars_out: &Path,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let returns = read_returns(returns_path)?;
    println!(
        "Loaded {} observations of {} assets from {}",
        returns.rows(),
        returns.cols(),
        returns_path.display()
    );

    let pb = ProgressBar::new(config.num_windows(returns.rows()) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.set_message("Solving frontier windows...");

    let report = backtest::run_with_progress(&returns, config, |_| pb.inc(1))?;
    pb.finish_with_message(format!(
        "{} windows, {} targets each",
        report.windows(),
        config.targets.len()
    ));

    if !quiet {
        println!("\nOOS portfolio means:");
        print!("{}", report.port_means);
        println!("\nOOS portfolio variances:");
        print!("{}", report.port_vars);
    }

    write_matrix(means_out, &report.port_means)?;
    write_matrix(vars_out, &report.port_vars)?;
    println!(
        "\nWrote {} and {}",
        means_out.display(),
        vars_out.display()
    );

    Ok(())
}

fn inspect(returns_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let returns = read_returns(returns_path)?;
    println!(
        "{}: {} observations x {} assets",
        returns_path.display(),
        returns.rows(),
        returns.cols()
    );
    let means = stats::mean(&returns)?;
    println!("Column means:");
    print!("{means}");
    Ok(())
}

/// Parse an inclusive `lo:hi:step` sweep specification.
fn parse_target_range(spec: &str) -> Result<Vec<f64>, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    let &[lo, hi, step] = parts.as_slice() else {
        return Err(format!("expected lo:hi:step, got {spec:?}"));
    };
    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|_| format!("invalid number {s:?} in target range"))
    };
    let (lo, hi, step) = (parse(lo)?, parse(hi)?, parse(step)?);
    if step <= 0.0 {
        return Err("target range step must be positive".to_string());
    }
    if hi < lo {
        return Err("target range is empty".to_string());
    }
    let count = ((hi - lo) / step + 1e-9).floor() as usize;
    Ok((0..=count).map(|i| lo + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_range_inclusive() {
        let targets = parse_target_range("0.005:0.1:0.005").unwrap();
        assert_eq!(targets.len(), 20);
        assert_eq!(targets[0], 0.005);
        assert!((targets[19] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_parse_target_range_rejects_garbage() {
        assert!(parse_target_range("0.1").is_err());
        assert!(parse_target_range("a:b:c").is_err());
        assert!(parse_target_range("0.1:0.2:0").is_err());
        assert!(parse_target_range("0.2:0.1:0.05").is_err());
    }
}
