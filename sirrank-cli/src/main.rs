//! sirrank CLI - influence ranking and spread comparison from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Load an edge list and show stats
//! sirrank stats graph.txt --skip-lines 4
//!
//! # Top 10 nodes per strategy
//! sirrank rank graph.txt --top 10
//!
//! # Race all rankings through SIR runs, CSV to stdout
//! sirrank compare graph.txt --top-k 20 --infection-prob 0.5 \
//!     --recovery-prob 0.01 --steps 20 --seed 42
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sirrank_core::algo::RankingStrategy;
use sirrank_core::compare::{compare, CompareConfig, ComparisonRecord};
use sirrank_core::rank::rank_descending;
use sirrank_core::sir::SirConfig;
use sirrank_core::{ContactGraph, EdgeListReport};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sirrank")]
#[command(about = "Influence ranking validated by SIR spread simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node and edge counts for an edge-list file
    Stats {
        /// Input edge-list file (whitespace-separated source/target pairs)
        input: PathBuf,

        /// Header lines to discard before parsing
        #[arg(long, default_value = "0")]
        skip_lines: usize,
    },

    /// Rank nodes by one or all influence strategies
    Rank {
        /// Input edge-list file
        input: PathBuf,

        /// Header lines to discard before parsing
        #[arg(long, default_value = "0")]
        skip_lines: usize,

        /// Strategy to rank with
        #[arg(short, long, default_value = "all")]
        strategy: StrategyArg,

        /// How many top nodes to print per strategy
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Seed SIR runs with each ranking's top nodes and compare spread
    Compare {
        /// Input edge-list file
        input: PathBuf,

        /// Header lines to discard before parsing
        #[arg(long, default_value = "0")]
        skip_lines: usize,

        /// Seeds per ranking (top-k)
        #[arg(long, default_value = "20")]
        top_k: usize,

        /// Per-edge, per-step infection probability
        #[arg(long, default_value = "0.1")]
        infection_prob: f64,

        /// Per-step recovery probability
        #[arg(long, default_value = "0.01")]
        recovery_prob: f64,

        /// Maximum simulation steps
        #[arg(long, default_value = "100")]
        steps: usize,

        /// RNG seed (shared by every ranking's run for comparability)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Every strategy
    All,
    /// Normalized total-degree centrality
    Degree,
    /// Harmonic closeness centrality
    Closeness,
    /// Damped PageRank
    Pagerank,
    /// LeaderRank power iteration
    Leaderrank,
    /// Neighbor-degree h-index
    Hindex,
    /// k-shell core number
    Kshell,
}

impl StrategyArg {
    fn strategies(self) -> Vec<RankingStrategy> {
        match self {
            Self::All => RankingStrategy::ALL.to_vec(),
            Self::Degree => vec![RankingStrategy::Degree],
            Self::Closeness => vec![RankingStrategy::Closeness],
            Self::Pagerank => vec![RankingStrategy::PageRank],
            Self::Leaderrank => vec![RankingStrategy::LeaderRank],
            Self::Hindex => vec![RankingStrategy::HIndex],
            Self::Kshell => vec![RankingStrategy::KShell],
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One column per ranking, one row per time step
    Csv,
    /// Full comparison record as JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { input, skip_lines } => cmd_stats(&input, skip_lines),
        Commands::Rank {
            input,
            skip_lines,
            strategy,
            top,
        } => cmd_rank(&input, skip_lines, strategy, top),
        Commands::Compare {
            input,
            skip_lines,
            top_k,
            infection_prob,
            recovery_prob,
            steps,
            seed,
            format,
            output,
        } => {
            let config = CompareConfig {
                top_k,
                sir: SirConfig {
                    infection_prob,
                    recovery_prob,
                    max_steps: steps,
                },
                seed,
            };
            cmd_compare(&input, skip_lines, &config, format, output.as_deref())
        }
    }
}

fn load_graph(path: &PathBuf, skip_lines: usize) -> Result<(ContactGraph, EdgeListReport)> {
    let (graph, report) = ContactGraph::from_edge_list_file(path, skip_lines)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if report.malformed_lines > 0 {
        tracing::warn!(
            file = %path.display(),
            malformed = report.malformed_lines,
            "skipped malformed edge-list lines"
        );
    }
    Ok((graph, report))
}

fn cmd_stats(input: &PathBuf, skip_lines: usize) -> Result<()> {
    let (graph, report) = load_graph(input, skip_lines)?;

    println!("Graph Statistics");
    println!("================");
    println!("Nodes:           {}", graph.node_count());
    println!("Edges:           {}", graph.edge_count());
    println!("Malformed lines: {}", report.malformed_lines);
    println!("Duplicate edges: {}", report.duplicate_edges);

    Ok(())
}

fn cmd_rank(input: &PathBuf, skip_lines: usize, strategy: StrategyArg, top: usize) -> Result<()> {
    let (graph, _) = load_graph(input, skip_lines)?;

    for s in strategy.strategies() {
        let ranking = rank_descending(&graph, &s.compute(&graph));

        println!("{} (top {}):", s.name(), top.min(ranking.len()));
        for (i, (node, score)) in ranking.iter().take(top).enumerate() {
            println!("  {}. {node} ({score:.6})", i + 1);
        }
    }

    Ok(())
}

fn cmd_compare(
    input: &PathBuf,
    skip_lines: usize,
    config: &CompareConfig,
    format: OutputFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    config
        .sir
        .validate()
        .context("Invalid simulation parameters")?;

    let (graph, _) = load_graph(input, skip_lines)?;
    println!("{} {}", graph.node_count(), graph.edge_count());

    let rankings: Vec<_> = RankingStrategy::ALL
        .iter()
        .map(|s| {
            (
                s.name().to_string(),
                rank_descending(&graph, &s.compute(&graph)),
            )
        })
        .collect();

    let record = compare(&graph, &rankings, config)?;

    let content = match format {
        OutputFormat::Csv => to_csv(&record),
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
    };

    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote comparison to {}", path.display());
        }
        None => print!("{content}"),
    }

    Ok(())
}

/// Render the record as a step-by-step table: `step,<name>,...` header,
/// one row per time step. Series that ended early leave trailing cells
/// empty rather than padding with stale counts.
fn to_csv(record: &ComparisonRecord) -> String {
    let mut out = String::from("step");
    for series in &record.series {
        out.push(',');
        out.push_str(&series.name);
    }
    out.push('\n');

    for step in 0..record.max_len() {
        out.push_str(&step.to_string());
        for series in &record.series {
            out.push(',');
            if let Some(count) = series.cumulative_infected.get(step) {
                out.push_str(&count.to_string());
            }
        }
        out.push('\n');
    }

    out
}
