use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use log::LevelFilter;
use serde::Deserialize;

use revsim::{CanonicalForm, OptimizationResult, reference_solve, solve_with, SolverConfig};
use revsim::algorithm::dual_simplex::dual;
use revsim::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;

/// A revised simplex solver for linear programs in canonical form.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the problem: `{"c": [..], "a": [[..], ..], "b": [..]}`
    problem_file: PathBuf,
    /// Also solve the problem with the reference solver
    #[arg(long)]
    compare: bool,
    /// Run the dual simplex method from this dual feasible basis instead
    #[arg(long, value_delimiter = ',')]
    basis: Option<Vec<usize>>,
    /// Number of iterations after which a phase gives up
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Values with an absolute value at most this large are considered zero
    #[arg(long)]
    tolerance: Option<f64>,
    /// Increase the log level; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Maximize `c·x` subject to `a·x = b`, `x ≥ 0`.
#[derive(Deserialize)]
struct ProblemFile {
    c: Vec<f64>,
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();
    init_logging(opts.verbose);

    println!("Reading problem file: \"{}\"...", opts.problem_file.display());
    let contents = fs::read_to_string(&opts.problem_file)
        .with_context(|| format!("couldn't read {}", opts.problem_file.display()))?;
    let ProblemFile { c, a, b } = serde_json::from_str(&contents)
        .context("couldn't parse the problem file")?;
    let problem = CanonicalForm::new(c, a, b).context("problem is inconsistent")?;

    let mut config = SolverConfig::default();
    if let Some(max_iterations) = opts.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }
    if let Some(tolerance) = opts.tolerance {
        config = config.with_tolerance(tolerance);
    }

    if let Some(basis) = opts.basis {
        println!("Running the dual simplex method...");
        let result = dual::<_, FirstProfitable>(&problem, basis, &config).context("dual simplex method failed")?;
        println!("Status: {:?} after {} iterations", result.status, result.iterations);
        println!("Basis: {:?}", result.basis);
        println!("kappa: {:?}", result.kappa);
        println!("y: {:?}", result.y);
        println!("Objective value: {}", problem.objective_value(&result.kappa));
        return Ok(());
    }

    println!("Solving...");
    let result = solve_with::<_, FirstProfitable>(&problem, &config).context("solver failed")?;
    report(&problem, &result);

    if opts.compare {
        println!("Solving with the reference solver...");
        let reference = reference_solve(&problem).context("reference solver failed")?;
        report(&problem, &reference);
    }

    Ok(())
}

/// Map the number of `-v` flags to a level; without any, `RUST_LOG` decides.
fn init_logging(verbose: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn report(problem: &CanonicalForm<f64>, result: &OptimizationResult<f64>) {
    match result {
        OptimizationResult::FiniteOptimum(x) => {
            println!("Solution computed: {:?}", x);
            println!("Objective value: {}", problem.objective_value(x));
        },
        OptimizationResult::Unbounded(_) => println!("Problem is unbounded."),
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::GaveUp(phase) => println!("Gave up during the {} ({}).", phase, phase.reason()),
    }
}
