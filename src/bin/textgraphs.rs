use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use textgraphs::{prelude::*, repr::digest::GraphDigest};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Parse a graph description and run shortest-path or spanning-tree queries on it
#[derive(Parser, Debug)]
#[command(name = "textgraphs")]
#[command(about = "Graph parsing, shortest paths and spanning trees", long_about = None)]
struct Args {
    /// Input file; reads from stdin if omitted
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Use the weights given in the input (otherwise every edge has weight 1)
    #[arg(short, long, global = true)]
    weighted: bool,

    /// Treat edges as directed
    #[arg(short, long, global = true)]
    directed: bool,

    /// Input syntax: "text" or "array"
    #[arg(short, long, global = true, default_value = "text")]
    mode: InputMode,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed nodes and edges as JSON
    Parse,
    /// Print a shortest path as JSON
    Path {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print a minimum spanning tree as JSON
    Mst {
        #[arg(long)]
        start: Option<String>,
    },
    /// Print the graph in the DOT language, optionally with a highlighted path or tree
    Dot {
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
        #[arg(long, conflicts_with = "from")]
        mst: bool,
    },
}

#[derive(Serialize)]
struct Summary<'a> {
    directed: bool,
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
    digest: String,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {path:?}")),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ParseConfig::new()
        .weighted(args.weighted)
        .directed(args.directed)
        .input_mode(args.mode);

    let raw = read_input(args.input.as_ref())?;
    let graph = config.parse(&raw)?;
    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Parse => {
            let summary = Summary {
                directed: graph.is_directed(),
                nodes: graph.nodes(),
                edges: graph.edges(),
                digest: graph.digest_sha256(),
            };
            serde_json::to_writer_pretty(&mut out, &summary)?;
        }
        Command::Path { from, to } => {
            let path = graph.shortest_path(&from, &to);
            if !path.is_reachable() {
                info!(%from, %to, "no path found");
            }
            serde_json::to_writer_pretty(&mut out, &path)?;
        }
        Command::Mst { start } => {
            let tree = graph.minimum_spanning_tree(start.as_deref());
            serde_json::to_writer_pretty(&mut out, &tree)?;
        }
        Command::Dot { from, to, mst } => {
            let mut rendering = DotWriter::new().render(&graph);
            if let (Some(from), Some(to)) = (from, to) {
                rendering.highlight_path(&graph.shortest_path(&from, &to));
            } else if mst {
                rendering.highlight_spanning_tree(&graph.minimum_spanning_tree(None));
            }
            rendering.try_write(&mut out)?;
            return Ok(());
        }
    }

    writeln!(out)?;
    Ok(())
}
