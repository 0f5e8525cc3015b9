use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fault_bag::harness::{self, CheckConfig};
use fault_bag::{bag, search, Problem};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fault-bag")]
#[command(version)]
#[command(about = "Choose the tests most likely to reveal a fault within a time budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print debug output of the solvers to stderr
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve one problem read from INPUT or stdin (the default)
    Solve {
        /// Problem file: `<n> <max_time>` followed by n lines `<probability> <time>`
        input: Option<PathBuf>,

        /// Solver to use
        #[arg(short, long, value_enum, default_value = "bag")]
        method: Method,
    },
    /// Cross-check the knapsack against exhaustive search on random trials
    Check {
        /// Number of random trial sets
        #[arg(short, long, default_value_t = CheckConfig::default().rounds)]
        rounds: usize,

        /// Trials per set
        #[arg(short = 'n', long, default_value_t = CheckConfig::default().nr_trials)]
        trials: usize,

        /// Time budget of every set
        #[arg(long, default_value_t = CheckConfig::default().max_time)]
        max_time: usize,

        /// Trial times are drawn below this bound
        #[arg(long, default_value_t = CheckConfig::default().max_trial_time)]
        max_trial_time: usize,

        /// Seed for reproducible trial sets
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    /// Dynamic programming over time and trials
    Bag,
    /// Enumerate every subset (at most 25 trials)
    Search,
}

/// Initialize tracing subscriber: warnings always, solver details with --debug
fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn read_problem(input: Option<&PathBuf>) -> Result<Problem> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Problem::read(BufReader::new(file))
                .with_context(|| format!("invalid problem in {}", path.display()))
        }
        None => Problem::read(io::stdin().lock()).context("invalid problem on stdin"),
    }
}

fn run_solve(input: Option<&PathBuf>, method: Method) -> Result<()> {
    let problem = read_problem(input)?;
    info!(
        nr_trials = problem.trials.len(),
        max_time = problem.max_time,
        ?method,
        "solving"
    );
    let solution = match method {
        Method::Bag => bag::solve(&problem.trials, problem.max_time),
        Method::Search => search::solve_by_search(&problem.trials, problem.max_time)?,
    };
    println!("{solution}");
    Ok(())
}

fn run_check(config: CheckConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = harness::run_check(&mut rng, &config)?;
    println!("{report}");
    if !report.accepted() {
        anyhow::bail!("knapsack and exhaustive search disagree");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    match args.command {
        None => run_solve(None, Method::Bag),
        Some(Commands::Solve { input, method }) => run_solve(input.as_ref(), method),
        Some(Commands::Check {
            rounds,
            trials,
            max_time,
            max_trial_time,
            seed,
        }) => {
            let config = CheckConfig {
                rounds,
                nr_trials: trials,
                max_time,
                max_trial_time,
                ..CheckConfig::default()
            };
            run_check(config, seed)
        }
    }
}
