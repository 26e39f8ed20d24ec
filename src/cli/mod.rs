//! CLI argument parsing for lodestar
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --undirected

pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub use output::OutputFormat;

/// Lodestar - graph algorithms over weighted graph files
#[derive(Parser, Debug)]
#[command(name = "lodestar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "lodestar_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "LODESTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat every edge as undirected, whatever the graph file says
    #[arg(long, global = true)]
    pub undirected: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from one node (non-negative weights)
    Dijkstra {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,

        /// Source node
        #[arg(long)]
        from: String,
    },

    /// Shortest paths from one node, allowing negative weights
    BellmanFord {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,

        /// Source node
        #[arg(long)]
        from: String,
    },

    /// Shortest path between two nodes guided by the file's heuristic table
    Astar {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,

        /// Source node
        #[arg(long)]
        from: String,

        /// Goal node
        #[arg(long)]
        to: String,
    },

    /// Shortest distances between every pair of nodes
    FloydWarshall {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,
    },

    /// Minimum spanning forest over the whole graph
    Kruskal {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,
    },

    /// Minimum spanning tree of one node's component
    Prim {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,

        /// Start node
        #[arg(long)]
        from: String,
    },

    /// Order nodes so every edge points forward
    Toposort {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,
    },

    /// Strongly connected components
    Scc {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,

        /// Also print the component DAG
        #[arg(long)]
        condense: bool,
    },

    /// Summarize a graph file
    Info {
        /// Graph file (.json, .toml, .yaml)
        file: PathBuf,
    },
}

impl Commands {
    /// Graph file every subcommand operates on
    pub fn file(&self) -> &Path {
        match self {
            Commands::Dijkstra { file, .. }
            | Commands::BellmanFord { file, .. }
            | Commands::Astar { file, .. }
            | Commands::FloydWarshall { file }
            | Commands::Kruskal { file }
            | Commands::Prim { file, .. }
            | Commands::Toposort { file }
            | Commands::Scc { file, .. }
            | Commands::Info { file } => file,
        }
    }
}
