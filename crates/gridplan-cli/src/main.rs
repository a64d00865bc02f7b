mod render;

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use gridplan_core::{DpSolver, SolveError, SolverConfig, SolverConfigError};
use gridplan_world::{GridSpec, ModelError, load_yaml};
use log::{LevelFilter, SetLoggerError, debug, info};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Sweep optimal backups until the largest change drops below epsilon.
    ValueIteration,
    /// Alternate policy evaluation and greedy improvement until stable.
    PolicyIteration,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::ValueIteration => write!(f, "value-iteration"),
            Algorithm::PolicyIteration => write!(f, "policy-iteration"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        write!(f, "{name}")
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gridplan",
    version,
    about = "Solve slippery grid worlds by dynamic programming"
)]
struct Args {
    /// Solution algorithm.
    #[arg(short, long, value_enum, default_value_t = Algorithm::ValueIteration)]
    algorithm: Algorithm,

    /// Discount factor override.
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Convergence threshold override.
    #[arg(short, long)]
    epsilon: Option<f64>,

    /// Seed override for the policy iteration starting policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Grid layout YAML. Falls back to the bundled 3x4 board.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Solver config YAML. Falls back to the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the solution as JSON instead of rendered grids.
    #[arg(long)]
    json: bool,

    /// Terminal log verbosity.
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Also write a debug-level log to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] SolverConfigError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] SetLoggerError),

    #[error("failed to serialize solution: {0}")]
    Json(#[from] serde_json::Error),
}

/// Terminal logging at the requested level, plus an optional debug-level
/// file log.
fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), CliError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| CliError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let spec = match &args.grid {
        Some(path) => load_yaml(path)?,
        None => GridSpec::from_default_yaml()?,
    };
    let world = spec.compile()?;

    let mut config = match &args.config {
        Some(path) => SolverConfig::from_yaml_path(path)?,
        None => SolverConfig::from_default_yaml()?,
    };
    if let Some(gamma) = args.gamma {
        config.gamma = gamma;
    }
    if let Some(epsilon) = args.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let solver = DpSolver::new(&world, config)?;
    info!(
        "solving {}x{} grid ({} states) with {}",
        world.rows(),
        world.cols(),
        world.state_count(),
        args.algorithm
    );

    let solution = match args.algorithm {
        Algorithm::ValueIteration => solver.solve_value_iteration_with_hook(|metrics| {
            debug!("sweep {}: delta {:.3e}", metrics.sweep, metrics.delta);
        })?,
        Algorithm::PolicyIteration => solver.solve_policy_iteration_with_hook(|metrics| {
            debug!(
                "round {}: eval_sweeps {} changes {} stable {}",
                metrics.round, metrics.eval_sweeps, metrics.policy_changes, metrics.stable
            );
        })?,
    };

    info!(
        "converged after {} sweeps, {} rounds, final delta {:.3e}",
        solution.metrics.sweeps_completed,
        solution.metrics.rounds_completed,
        solution.metrics.final_delta
    );

    if args.json {
        let snapshot = solver.snapshot(&solution);
        println!("{}", snapshot.to_json_string()?);
        return Ok(());
    }

    let ruler = "-".repeat(world.cols() * 10);
    println!("Utilities");
    println!("{ruler}");
    print!("{}", render::utilities_grid(&world, &solution.utilities));
    println!();
    println!("Policy");
    println!("{ruler}");
    print!("{}", render::policy_grid(&world, &solution.policy));

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log_level.into(), args.log_file.as_deref()) {
        eprintln!("gridplan: {err}");
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("gridplan: {err}");
        process::exit(1);
    }
}
