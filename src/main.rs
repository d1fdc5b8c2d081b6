use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use seqwarp_dtw::{Dtw, PointMetric};
use seqwarp_io::{BatchReader, DistanceWriter, ParsePolicy, SequenceReader};

#[derive(Parser)]
#[command(name = "seqwarp")]
#[command(about = "DTW distance between delimited-text sequences")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Coerce unparsable cells to 0.0 instead of failing (legacy behavior)
    #[arg(long, global = true)]
    lenient: bool,

    /// Refuse cost matrices larger than this many cells
    #[arg(long, global = true)]
    max_cells: Option<usize>,
}

/// Arguments shared by both modes.
#[derive(Args, Debug, Clone)]
struct PairArgs {
    /// Path to the X input file
    #[arg(long)]
    x: PathBuf,

    /// Path to the Y input file
    #[arg(long)]
    y: PathBuf,

    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Distance-metric tag ("se" = squared error)
    #[arg(long)]
    metric: String,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the DTW distance for one sequence pair (one value per row)
    Single {
        #[command(flatten)]
        pair: PairArgs,
    },

    /// Compute one DTW distance per row pair of two batch files
    Batch {
        #[command(flatten)]
        pair: PairArgs,
    },
}

fn build_engine(metric_tag: &str, max_cells: Option<usize>) -> Dtw {
    let mut engine = Dtw::new(PointMetric::from_tag(metric_tag));
    if let Some(limit) = max_cells {
        engine = engine.with_max_cells(limit);
    }
    engine
}

fn build_writer(output: Option<&PathBuf>) -> DistanceWriter {
    match output {
        Some(path) => DistanceWriter::file(path),
        None => DistanceWriter::stdout(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = if cli.lenient {
        ParsePolicy::Lenient
    } else {
        ParsePolicy::Strict
    };

    match cli.command {
        Command::Single { pair } => {
            let engine = build_engine(&pair.metric, cli.max_cells);

            let x = SequenceReader::new(&pair.x)
                .with_policy(policy)
                .read()
                .context("failed to read X sequence")?;
            let y = SequenceReader::new(&pair.y)
                .with_policy(policy)
                .read()
                .context("failed to read Y sequence")?;
            info!(x_len = x.len(), y_len = y.len(), "sequences loaded");

            let distance = engine
                .distance(x.as_view(), y.as_view())
                .context("DTW computation failed")?;
            info!(distance = distance.value(), "distance computed");

            build_writer(pair.output.as_ref())
                .write_single(distance)
                .context("failed to write result")?;
        }

        Command::Batch { pair } => {
            let engine = build_engine(&pair.metric, cli.max_cells);

            let xs = BatchReader::new(&pair.x)
                .with_policy(policy)
                .read()
                .context("failed to read X batch")?;
            let ys = BatchReader::new(&pair.y)
                .with_policy(policy)
                .read()
                .context("failed to read Y batch")?;
            info!(n_x = xs.len(), n_y = ys.len(), "batches loaded");

            let distances = engine
                .batch(&xs, &ys)
                .context("batch DTW computation failed")?;
            info!(n_pairs = distances.len(), "batch distances computed");

            build_writer(pair.output.as_ref())
                .write_batch(&distances)
                .context("failed to write results")?;
        }
    }

    Ok(())
}
