//! CLI entry point for the `algokit` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use algokit::cli::commands;
use algokit::graph::TraversalOrder;
use algokit::search::SearchAlgo;
use algokit::sort::SortAlgo;
use algokit::types::AlgoError;

#[derive(Parser)]
#[command(
    name = "algokit",
    about = "algokit CLI — classical data structures and algorithms"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a sequence of integers
    Sort {
        /// Algorithm: bubble, merge, quick
        #[arg(long, default_value = "quick")]
        algo: String,
        /// The values to sort
        values: Vec<i64>,
    },
    /// Search a sequence of integers for a target
    Search {
        /// Algorithm: linear, binary (binary requires sorted input)
        #[arg(long, default_value = "linear")]
        algo: String,
        /// The value to look for
        #[arg(long)]
        target: i64,
        /// The values to search
        values: Vec<i64>,
    },
    /// Build a binary search tree and walk it in order
    Bst {
        /// A key to search for after building
        #[arg(long)]
        search: Option<i64>,
        /// The keys to insert, in order
        keys: Vec<i64>,
    },
    /// Build a directed graph and traverse it
    Graph {
        /// An edge "u:v"; repeat for each edge
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Starting vertex id
        #[arg(long)]
        start: usize,
        /// Traversal order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Apply operations to a singly linked list
    List {
        /// Operations: push:<v>, append:<v>, after:<n>:<v>
        ops: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Sort { algo, values } => {
            let algo = match SortAlgo::from_name(&algo) {
                Some(algo) => algo,
                None => {
                    eprintln!("Invalid sort algorithm: {}", algo);
                    process::exit(3);
                }
            };
            commands::cmd_sort(algo, values, json)
        }
        Commands::Search {
            algo,
            target,
            values,
        } => {
            let algo = match SearchAlgo::from_name(&algo) {
                Some(algo) => algo,
                None => {
                    eprintln!("Invalid search algorithm: {}", algo);
                    process::exit(3);
                }
            };
            commands::cmd_search(algo, target, values, json)
        }
        Commands::Bst { search, keys } => commands::cmd_bst(keys, search, json),
        Commands::Graph {
            edges,
            start,
            order,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_graph(edges, start, order, json)
        }
        Commands::List { ops } => commands::cmd_list(ops, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            AlgoError::InvalidNode(_) => 4,
            AlgoError::InvalidListOp(_) | AlgoError::InvalidEdge(_) => 3,
        };
        process::exit(code);
    }
}
