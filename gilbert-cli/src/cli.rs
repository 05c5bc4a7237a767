//! Command-line experiment driver for Gilbert random-graph statistics.
//!
//! Offers a `run` command executing a single trial and a `sweep` command
//! reproducing the scaling experiment: the node count doubles each trial
//! while the edge probability is rescaled to hold the expected degree
//! steady. The driver only logs and renders the scalar statistics the core
//! computes; plot rendering consumes the CSV it emits and stays outside
//! this crate.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use gilbert_core::{GilbertBuilder, GilbertError, TrialResult};
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_NODES: usize = 32;
const DEFAULT_EDGE_PROBABILITY: f64 = 0.3;
const DEFAULT_TRIALS: usize = 20;

/// SplitMix64 constants used to derive per-trial seeds from the base seed.
const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "gilbert",
    about = "Generate Gilbert random graphs and estimate their statistics."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Execute a single generation and estimation trial.
    Run(RunCommand),
    /// Execute the doubling sweep across increasing graph sizes.
    Sweep(SweepCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of nodes in the generated graph.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Probability that each unordered node pair carries an edge.
    #[arg(long = "edge-probability", default_value_t = DEFAULT_EDGE_PROBABILITY)]
    pub edge_probability: f64,

    /// Seed for the random generator; omit for an entropy-derived seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Number of doubling trials to execute.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Node count for the first trial; doubles on every following trial.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edge probability for the first trial; rescaled each trial to keep
    /// the expected degree steady.
    #[arg(long = "edge-probability", default_value_t = DEFAULT_EDGE_PROBABILITY)]
    pub edge_probability: f64,

    /// Base seed for deriving per-trial generators; omit for entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Regeneration attempts per trial when a graph comes out disconnected.
    /// The reference behaviour is zero: abort the whole sweep.
    #[arg(long, default_value_t = 0)]
    pub retries: usize,

    /// Write the per-trial rows as CSV to this path.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while writing an output artefact.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Core generation or estimation failed.
    #[error(transparent)]
    Core(#[from] GilbertError),
}

/// One rendered row of the execution summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRow {
    /// Number of nodes in the generated graph.
    pub nodes: usize,
    /// Number of unordered edges in the generated graph.
    pub edges: usize,
    /// Mean node degree.
    pub average_degree: f64,
    /// Mean shortest-path length over the sampled pairs.
    pub average_path_length: f64,
    /// Global clustering coefficient.
    pub clustering_coefficient: f64,
}

impl From<&TrialResult> for TrialRow {
    fn from(result: &TrialResult) -> Self {
        Self {
            nodes: result.nodes(),
            edges: result.edges(),
            average_degree: result.average_degree(),
            average_path_length: result.average_path_length(),
            clustering_coefficient: result.clustering_coefficient(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// One row per completed trial, in execution order.
    pub rows: Vec<TrialRow>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, estimation, or output writing
/// fails.
///
/// # Examples
/// ```
/// use gilbert_cli::cli::{Cli, Command, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         nodes: 6,
///         edge_probability: 1.0,
///         seed: Some(11),
///     }),
/// };
/// let summary = run_cli(cli).expect("complete graphs are connected");
/// assert_eq!(summary.rows.len(), 1);
/// assert_eq!(summary.rows[0].edges, 15);
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
        Command::Sweep(sweep) => sweep_command(sweep),
    }
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let result = run_trial(command.nodes, command.edge_probability, command.seed, 0)?;
    Ok(ExecutionSummary {
        rows: vec![TrialRow::from(&result)],
    })
}

fn sweep_command(command: SweepCommand) -> Result<ExecutionSummary, CliError> {
    let mut nodes = command.nodes;
    let mut edge_probability = command.edge_probability;
    let mut rows = Vec::with_capacity(command.trials);

    for trial in 0..command.trials {
        info!(trial, nodes, edge_probability, "creating graph");
        let seed = command.seed.map(|base| mix_seed(base, trial));
        let result = run_trial(nodes, edge_probability, seed, command.retries)?;
        info!(
            trial,
            average_degree = result.average_degree(),
            average_path_length = result.average_path_length(),
            clustering_coefficient = result.clustering_coefficient(),
            "trial statistics"
        );
        rows.push(TrialRow::from(&result));

        edge_probability = rescale_probability(edge_probability, nodes);
        nodes *= 2;
    }

    if let Some(path) = &command.csv {
        write_csv(path, &rows)?;
    }

    Ok(ExecutionSummary { rows })
}

/// Runs one trial, regenerating with a fresh derived seed up to `retries`
/// times when the graph comes out disconnected. Retry is deliberately a
/// driver policy; the core treats disconnection as fatal.
fn run_trial(
    nodes: usize,
    edge_probability: f64,
    seed: Option<u64>,
    retries: usize,
) -> Result<TrialResult, CliError> {
    let mut attempt = 0;
    loop {
        let mut builder = GilbertBuilder::new()
            .with_nodes(nodes)
            .with_edge_probability(edge_probability);
        if let Some(base) = seed {
            builder = builder.with_seed(mix_seed(base, attempt));
        }

        match builder.build()?.run() {
            Ok(trial) => return Ok(trial.into_parts().1),
            Err(err @ GilbertError::Disconnected { .. }) if attempt < retries => {
                warn!(error = %err, attempt, "regenerating disconnected graph");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Derives a decorrelated seed for trial or attempt `index` via SplitMix64.
fn mix_seed(base: u64, index: usize) -> u64 {
    let mut state = base ^ (index as u64).wrapping_add(1).wrapping_mul(SEED_SPACING);
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}

/// Rescales the edge probability for the next doubling so the expected
/// degree `p · (n - 1)` stays constant: `p' = p · (n - 1) / (2n - 1)`.
fn rescale_probability(edge_probability: f64, nodes: usize) -> f64 {
    edge_probability * (nodes - 1) as f64 / (2 * nodes - 1) as f64
}

fn write_csv(path: &Path, rows: &[TrialRow]) -> Result<(), CliError> {
    let map_err = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(map_err)?;
    let mut writer = BufWriter::new(file);
    write_rows_csv(&mut writer, rows).map_err(map_err)?;
    writer.flush().map_err(map_err)
}

fn write_rows_csv(writer: &mut impl Write, rows: &[TrialRow]) -> io::Result<()> {
    writeln!(
        writer,
        "nodes,edges,average_degree,average_path_length,clustering_coefficient"
    )?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{}",
            row.nodes,
            row.edges,
            row.average_degree,
            row.average_path_length,
            row.clustering_coefficient
        )?;
    }
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use gilbert_cli::cli::{ExecutionSummary, TrialRow, render_summary};
///
/// let summary = ExecutionSummary {
///     rows: vec![TrialRow {
///         nodes: 32,
///         edges: 149,
///         average_degree: 9.3125,
///         average_path_length: 1.83,
///         clustering_coefficient: 0.31,
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer).expect("writing to a vector cannot fail");
/// let text = String::from_utf8(buffer).expect("summary is UTF-8");
/// assert!(text.contains("trials: 1"));
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "trials: {}", summary.rows.len())?;
    writeln!(
        writer,
        "nodes\tedges\taverage_degree\taverage_path_length\tclustering_coefficient"
    )?;
    for row in &summary.rows {
        writeln!(
            writer,
            "{}\t{}\t{:.4}\t{:.4}\t{:.4}",
            row.nodes,
            row.edges,
            row.average_degree,
            row.average_path_length,
            row.clustering_coefficient
        )?;
    }
    Ok(())
}
