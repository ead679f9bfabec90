//! Reads a graph in the text edge-list format (from a file or stdin), then
//! prints its minimum spanning tree and the shortest paths from one vertex.
//!
//! Usage:
//!   cargo run --example graph_report -- path/to/graph.txt --source 0
//!   cat path/to/graph.txt | cargo run --example graph_report -- -v

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use wgraph::{Graph, tracing_support};

/// Print the minimum spanning tree and shortest paths of a weighted graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (use '-' or omit to read from stdin)
    input: Option<String>,

    /// Vertex to measure shortest paths from
    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print per-span timings to stderr when done
    #[arg(long)]
    timings: bool,
}

fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_support::init_logging(level);

    let result = match args.input.as_deref() {
        Some("-") | None => Graph::read_from(io::stdin().lock()),
        Some(path) => match File::open(path) {
            Ok(file) => Graph::read_from(BufReader::new(file)),
            Err(err) => {
                eprintln!("Failed to open {path}: {err}");
                process::exit(1);
            }
        },
    };
    let graph = match result {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("Failed to read graph: {err}");
            process::exit(1);
        }
    };

    println!(
        "Graph: {} vertices, {} edges, total weight {}",
        graph.vertex_count(),
        graph.edge_count(),
        graph.weight()
    );

    let tree = graph.kruskal();
    println!("Minimum spanning tree (weight {}):", tree.weight());
    print!("{tree}");

    match graph.dijkstra(args.source) {
        Ok(paths) => {
            println!("Shortest paths from {}:", args.source);
            print!("{paths}");
        }
        Err(err) => {
            eprintln!("Cannot compute shortest paths: {err}");
            process::exit(1);
        }
    }

    if args.timings {
        tracing_support::dump_method_timings();
    }
}
