//! FreeCell deal solver.
//!
//! Reads a deal file, runs the selected search strategy against a
//! wall-clock budget and writes the move sequence (or `No solution`) to the
//! output file.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::{error, info};
use thiserror::Error;

use freecell_engine::deal::{parse_deal, DealError};
use freecell_engine::rules::StackingRule;
use freecell_solver::packed::Equivalence;
use freecell_solver::report::{write_run_report, write_solution, ReportError, RunReport};
use freecell_solver::search::{solve, Outcome, SearchConfig, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    #[value(alias = "b", alias = "breadth")]
    Bfs,
    #[value(alias = "d", alias = "depth")]
    Dfs,
    Best,
    #[value(name = "astar", alias = "a")]
    Astar,
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Strategy::Bfs,
            Algorithm::Dfs => Strategy::Dfs,
            Algorithm::Best => Strategy::Best,
            Algorithm::Astar => Strategy::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StackingMode {
    /// Standard FreeCell: one rank lower, opposite color.
    OppositeColor,
    /// Looser variant: one rank lower, any different suit.
    DifferentSuit,
}

impl From<StackingMode> for StackingRule {
    fn from(mode: StackingMode) -> Self {
        match mode {
            StackingMode::OppositeColor => StackingRule::OppositeColor,
            StackingMode::DifferentSuit => StackingRule::DifferentSuit,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "solver", about = "FreeCell deal solver", version)]
struct Cli {
    /// Search strategy to run.
    #[arg(ignore_case = true)]
    algorithm: Algorithm,
    /// Deal file: one whitespace-separated line of card tokens per column.
    input: PathBuf,
    /// Destination for the move list.
    output: PathBuf,
    /// Wall-clock budget in seconds.
    #[arg(long, default_value_t = 900)]
    timeout_secs: u64,
    /// Tableau stacking rule.
    #[arg(long, value_enum, default_value_t = StackingMode::OppositeColor)]
    stacking: StackingMode,
    /// Deduplicate states by accessible-card multisets instead of full
    /// positional identity. Faster, can miss solutions.
    #[arg(long)]
    loose_closed_set: bool,
    /// Expand only foundation moves whenever one exists. Unsound for astar.
    #[arg(long)]
    foundation_priority: bool,
    /// Also write a JSON run report to this path.
    #[arg(long)]
    stats: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read deal file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("cannot write solution file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let text = fs::read_to_string(&cli.input).map_err(|source| CliError::ReadInput {
        path: cli.input.clone(),
        source,
    })?;
    let initial = parse_deal(&text)?;

    let config = SearchConfig {
        strategy: cli.algorithm.into(),
        stacking: cli.stacking.into(),
        equivalence: if cli.loose_closed_set {
            Equivalence::Loose
        } else {
            Equivalence::Strict
        },
        foundation_priority: cli.foundation_priority,
        deadline: Duration::from_secs(cli.timeout_secs),
    };

    let result = solve(&initial, &config);
    match &result.outcome {
        Outcome::Solved(moves) => info!(
            "{}: solved in {} moves, {} states explored, {:?}",
            config.strategy.label(),
            moves.len(),
            result.stats.explored,
            result.stats.elapsed
        ),
        Outcome::Timeout(trace) => info!(
            "{}: deadline reached after {} states, writing {}-move partial trace",
            config.strategy.label(),
            result.stats.explored,
            trace.len()
        ),
        Outcome::Exhausted => info!(
            "{}: search space exhausted after {} states, no solution",
            config.strategy.label(),
            result.stats.explored
        ),
    }

    write_solution(&cli.output, &result.outcome).map_err(|source| CliError::WriteOutput {
        path: cli.output.clone(),
        source,
    })?;

    if let Some(stats_path) = &cli.stats {
        let report = RunReport::new(config.strategy.label(), &result);
        write_run_report(stats_path, &report)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}
