use anyhow::{Context, Result};
use clap::Parser;
use reachgraph::config::Config;
use reachgraph::parse::load_graph;
use reachgraph::query::Session;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reachgraph")]
#[command(about = "Load a graph description and answer \"is there a path from A to B?\" interactively")]
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

    /// Print the route when a path exists
    #[arg(short, long)]
    show_path: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    // Logs go to stderr so they never mix with answers on stdout
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.logging.log_level.as_str())
    ).init();
    config.log_source();

    let options = config
        .build_options()
        .with_overrides(args.undirected, args.keep_duplicates);

    // Any construction error ends the process before a single query is read
    let graph = load_graph(&args.file, &options)
        .with_context(|| format!("Failed to build graph from {}", args.file.display()))?;

    let mut session = Session::new(&graph).show_path(args.show_path || config.query.show_path);
    if let Some(prompt) = &config.query.prompt {
        session = session.with_prompt(prompt.clone());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
