//! CLI entry point for the `gwalk` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — run traversal and analysis algorithms on a graph given as arguments"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Store every edge in both directions
    #[arg(long, global = true)]
    undirected: bool,

    /// Vertex to add before any edges (repeatable)
    #[arg(long = "vertex", short = 'v', global = true)]
    vertices: Vec<String>,

    /// Edge as FROM:TO (repeatable)
    #[arg(long = "edge", short = 'e', global = true)]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every vertex with its neighbors
    Show,
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Starting vertex
        start: String,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Starting vertex
        start: String,
    },
    /// Shortest (fewest edges) path between two vertices
    Shortest {
        /// Starting vertex
        start: String,
        /// Target vertex
        target: String,
    },
    /// Iterative depth-first path search between two vertices
    Path {
        /// Starting vertex
        start: String,
        /// Target vertex
        target: String,
    },
    /// Vertices at an exact breadth-first distance from a vertex
    NAway {
        /// Starting vertex
        start: String,
        /// Distance in edges
        distance: usize,
    },
    /// Check whether the graph is bipartite
    Bipartite,
    /// List reachability groups
    Components,
    /// Check for a cycle
    Cycle {
        /// Search every branch instead of only first neighbors
        #[arg(long)]
        full: bool,
    },
    /// Order vertices topologically
    Topo {
        /// Use Kahn's algorithm instead of the rotated insertion order
        #[arg(long)]
        kahn: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = commands::build_graph(cli.undirected, &cli.vertices, &cli.edges).and_then(
        |graph| match &cli.command {
            Commands::Show => commands::cmd_show(&graph, json),
            Commands::Bfs { start } => commands::cmd_bfs(&graph, start, json),
            Commands::Dfs { start } => commands::cmd_dfs(&graph, start, json),
            Commands::Shortest { start, target } => {
                commands::cmd_shortest(&graph, start, target, json)
            }
            Commands::Path { start, target } => commands::cmd_path(&graph, start, target, json),
            Commands::NAway { start, distance } => {
                commands::cmd_n_away(&graph, start, *distance, json)
            }
            Commands::Bipartite => commands::cmd_bipartite(&graph, json),
            Commands::Components => commands::cmd_components(&graph, json),
            Commands::Cycle { full } => commands::cmd_cycle(&graph, *full, json),
            Commands::Topo { kahn } => commands::cmd_topo(&graph, *kahn, json),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::NotFound(_) => 4,
            GraphError::PathNotFound { .. } => 6,
            GraphError::CycleDetected => 7,
        };
        process::exit(code);
    }
}
