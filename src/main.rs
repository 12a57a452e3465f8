use clap::Parser;
use std::path::PathBuf;
use anyhow::{bail, Context};
use log::{info, LevelFilter};

use flightpath::{find_path, Graph, SearchResult};
use flightpath::graph::reference::air_route_graph;


/// Find the shortest air route between two airports
#[derive(Parser, Debug)]
#[command(name = "flightpath")]
#[command(about = "Find the shortest air route between two airports", long_about = None)]
struct Args {
    /// Starting airport
    #[arg(long, required_unless_present = "list")]
    from: Option<String>,

    /// Destination airport
    #[arg(long, required_unless_present = "list")]
    to: Option<String>,

    /// JSON graph specification, the built-in network is used when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Print the known airports and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let graph = match &args.graph {
        Some(path) => {
            info!("loading graph from {}", path.display());
            Graph::load(path).with_context(|| format!("could not load {}", path.display()))?
        }
        None => air_route_graph()?,
    };

    if args.list {
        for label in graph.labels() {
            println!("{label}");
        }
        return Ok(());
    }

    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        bail!("both --from and --to are required");
    };

    let start = resolve(&graph, from)?;
    let goal = resolve(&graph, to)?;

    match find_path(&graph, start, goal)? {
        SearchResult::Found(route) => {
            println!("Shortest Route: {route}");
            println!("Shortest Distance: {} km", route.cost);
        }
        SearchResult::NotFound => println!("No route found."),
    }

    Ok(())
}

fn resolve<'g>(graph: &'g Graph, input: &str) -> anyhow::Result<&'g str> {
    match graph.resolve(input) {
        Some(label) => Ok(label),
        None => bail!("Invalid airport code: {}", input.trim()),
    }
}
