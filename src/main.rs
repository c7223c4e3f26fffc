//! Command-line wrapper: load an edge list, run detection, print the result
//!
//! Per-iteration progress goes through the `log` facade (enable with
//! `RUST_LOG=info`); only the final best partition is printed to stdout.

use anyhow::Result;
use clap::Parser;
use girvan_newman::{
    detect_communities_capped, read_edge_list, AdjacencyGraph, IndexBase, IterationReport,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "girvan-newman",
    about = "Divisive community detection via edge betweenness"
)]
struct Args {
    /// Edge-list file: one edge per line, two whitespace-separated integers
    input: PathBuf,

    /// Treat input ids as 0-based and shift them to the internal 1-based range
    #[arg(long)]
    zero_indexed: bool,

    /// Seed for the tie-break RNG; a fixed seed reproduces a run exactly
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many removals even if edges remain (defensive bound)
    #[arg(long)]
    max_iterations: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pairs = read_edge_list(&args.input).await?;
    let base = if args.zero_indexed {
        IndexBase::Zero
    } else {
        IndexBase::One
    };
    let mut graph = AdjacencyGraph::from_edge_list(&pairs, base);
    info!(
        "loaded {} nodes, {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        args.input.display()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = detect_communities_capped(
        &mut graph,
        &mut rng,
        args.max_iterations,
        |report: &IterationReport| {
            info!(
                "modularity: {} - communities: {}",
                report.modularity, report.community_count
            );
        },
    )?;

    println!(
        "final modularity: {} - communities: {}",
        result.best_modularity, result.best_community_count
    );
    Ok(())
}
