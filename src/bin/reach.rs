use clap::Parser;
use reachgraph::config::Config;
use reachgraph::graph::trace_path;
use reachgraph::parse::load_graph;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "reach")]
#[command(about = "Answer a single reachability query (exit 0: path, 1: no path, 2: error)")]
struct Args {
    /// Graph description file
    file: PathBuf,

    /// Origin node name
    src: String,

    /// Destination node name
    dest: String,

    /// Config file (defaults to $REACHGRAPH_CONFIG or ./reachgraph.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record every edge line in both directions
    #[arg(short, long)]
    undirected: bool,

    /// Insert a new node for every name occurrence instead of reusing the first
    #[arg(long)]
    keep_duplicates: bool,

    /// Emit JSON instead of a sentence
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Answer<'a> {
    src: &'a str,
    dest: &'a str,
    known: bool,
    reachable: bool,
    route: Option<Vec<String>>,
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let config = Config::load(args.config.as_deref())?;
    config.log_source();
    let options = config
        .build_options()
        .with_overrides(args.undirected, args.keep_duplicates);

    let graph = load_graph(&args.file, &options)?;

    let endpoints = graph.find_node(&args.src).zip(graph.find_node(&args.dest));
    let route = endpoints.and_then(|(src, dest)| trace_path(&graph, src, dest));

    let answer = Answer {
        src: &args.src,
        dest: &args.dest,
        known: endpoints.is_some(),
        reachable: route.is_some(),
        route: route
            .as_ref()
            .map(|ids| ids.iter().map(|&id| graph.name(id).to_string()).collect()),
    };

    if args.json {
        println!("{}", serde_json::to_string(&answer)?);
    } else if !answer.known {
        println!("Destinations do not exist.");
    } else if let Some(route) = &answer.route {
        println!("There is a path from {} to {}: {}", args.src, args.dest, route.join(" -> "));
    } else {
        println!("There is no path from {} to {}.", args.src, args.dest);
    }

    Ok(answer.reachable)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
