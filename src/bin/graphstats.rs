use anyhow::{Context, Result};
use clap::Parser;
use reachgraph::config::Config;
use reachgraph::graph::{Graph, Reachability};
use reachgraph::parse::load_graph;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "graphstats")]
#[command(about = "Print node, edge and reachability statistics for a graph description")]
struct Args {
    /// Graph description file
    file: PathBuf,

    /// Config file (defaults to $REACHGRAPH_CONFIG or ./reachgraph.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record every edge line in both directions
    #[arg(short, long)]
    undirected: bool,

    /// Insert a new node for every name occurrence instead of reusing the first
    #[arg(long)]
    keep_duplicates: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct NodeStats {
    name: String,
    out_degree: usize,
    reachable: usize,
}

#[derive(Debug, Serialize)]
struct GraphStats {
    nodes: usize,
    adjacencies: usize,
    is_empty: bool,
    has_edges: bool,
    per_node: Vec<NodeStats>,
}

fn collect_stats(graph: &Graph) -> GraphStats {
    let mut engine = Reachability::new();
    let per_node = graph
        .nodes()
        .map(|(id, node)| NodeStats {
            name: node.name().to_string(),
            out_degree: node.neighbours().len(),
            // Not counting the node itself
            reachable: engine.reachable_from(graph, id).len().saturating_sub(1),
        })
        .collect();

    GraphStats {
        nodes: graph.node_count(),
        adjacencies: graph.edge_count(),
        is_empty: graph.is_empty(),
        has_edges: graph.has_edges(),
        per_node,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    config.log_source();
    let options = config
        .build_options()
        .with_overrides(args.undirected, args.keep_duplicates);

    let graph = load_graph(&args.file, &options)
        .with_context(|| format!("Failed to build graph from {}", args.file.display()))?;
    let stats = collect_stats(&graph);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n=== Graph Statistics: {} ===\n", args.file.display());
    println!("Nodes: {}", stats.nodes);
    println!("Adjacencies: {}", stats.adjacencies);
    println!("Empty: {}", stats.is_empty);
    println!("Has edges: {}", stats.has_edges);

    if stats.per_node.is_empty() {
        return Ok(());
    }

    println!("\n{:-<60}", "");
    println!("{:<40} {:>8} {:>10}", "Node", "Out", "Reachable");
    println!("{:-<60}", "");
    for node in &stats.per_node {
        println!("{:<40} {:>8} {:>10}", node.name, node.out_degree, node.reachable);
    }
    println!("{:-<60}", "");

    Ok(())
}
