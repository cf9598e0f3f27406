//! `dijkstra` - shortest path from every node to every other node of an
//! edge-list file, followed by an ASCII drawing of the graph.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dijkstra::Frontier;
use dijkstra::ParsePolicy;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

mod config;
mod output;

use config::Config;
use config::FrontierChoice;
use output::OutputFormat;

const DEFAULT_INPUT: &str = "graph.dat";
const DEFAULT_ART_FILE: &str = "graph_output.dat";

/// Shortest paths between every pair of nodes of a weighted directed graph.
///
/// Each input line declares a node followed by `target weight` pairs, e.g.
/// `1 2 10 3 5` gives node 1 an edge of weight 10 to node 2 and one of
/// weight 5 to node 3. Targets that never get a line of their own still
/// count as nodes.
#[derive(Parser, Debug)]
#[command(name = "dijkstra")]
#[command(author, version)]
#[command(after_help = "Examples:
  dijkstra                         Read graph.dat, print table and diagram
  dijkstra roads.dat --format json Machine-readable results
  dijkstra roads.dat --jobs 0      One worker per core")]
pub struct Cli {
    /// Edge-list file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Drop a trailing target without weight instead of failing
    #[arg(long)]
    lenient: bool,

    /// Priority structure used by Dijkstra
    #[arg(long, value_enum)]
    frontier: Option<FrontierChoice>,

    /// Run sources in parallel on N threads (0 = one per core)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Result format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Where to write the diagram
    #[arg(long, value_name = "PATH")]
    art_file: Option<PathBuf>,

    /// Skip the diagram entirely
    #[arg(long)]
    no_art: bool,

    /// Print the adjacency list before the results
    #[arg(long)]
    dump_adjacency: bool,

    /// Settings file (default: ./dijkstra.toml when present)
    #[arg(long, env = "DIJKSTRA_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Flags merged over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    input: PathBuf,
    policy: ParsePolicy,
    frontier: Frontier,
    threads: Option<usize>,
    format: OutputFormat,
    art_file: Option<PathBuf>,
    dump_adjacency: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let policy = if cli.lenient || config.parse.lenient {
            ParsePolicy::Lenient
        } else {
            ParsePolicy::Strict
        };
        let draw_art = !cli.no_art && config.output.draw_art.unwrap_or(true);
        let art_file = draw_art.then(|| {
            cli.art_file
                .clone()
                .or_else(|| config.output.art_file.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ART_FILE))
        });

        Self {
            input: cli.input.clone(),
            policy,
            frontier: cli
                .frontier
                .or(config.engine.frontier)
                .unwrap_or_default()
                .into(),
            threads: cli.jobs.or(config.engine.threads),
            format: cli.format.or(config.output.format).unwrap_or_default(),
            art_file,
            dump_adjacency: cli.dump_adjacency,
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let parsed = dijkstra::load_edge_list(&settings.input, settings.policy)
        .with_context(|| format!("failed to load graph from {}", settings.input.display()))?;
    let graph = parsed.graph;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        dropped = parsed.warnings.len(),
        "graph loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if settings.dump_adjacency {
        write!(out, "{graph}")?;
        writeln!(out)?;
    }

    let reports = match settings.threads {
        Some(threads) => dijkstra::all_pairs_parallel(&graph, settings.frontier, Some(threads)),
        None => dijkstra::all_pairs(&graph, settings.frontier),
    }
    .context("shortest path run failed")?;
    write!(out, "{}", output::format_reports(&reports, settings.format)?)?;

    let Some(art_file) = &settings.art_file else {
        return Ok(());
    };
    let art = graph_art::render(&graph).to_string();

    if settings.format.allows_art() {
        writeln!(out)?;
        writeln!(out, "*********  GRAPH IMAGE DRAWN BELOW  *********")?;
        writeln!(
            out,
            "*********  ALSO WRITTEN TO {}  *********",
            art_file.display()
        )?;
        write!(out, "{art}")?;
    }

    match std::fs::write(art_file, &art) {
        Ok(()) => info!(path = %art_file.display(), "diagram written"),
        Err(e) => warn!("Unable to write diagram to {}: {}", art_file.display(), e),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref());
    let settings = Settings::resolve(&cli, &config);
    tracing::debug!(?settings, "resolved settings");

    run(&settings)
}
