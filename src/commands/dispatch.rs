//! Command dispatch logic for lodestar
use std::time::Instant;

use lodestar_core::config::EngineConfig;
use lodestar_core::error::Result;
use lodestar_core::graph::{load_graph, LoadOptions};

use crate::cli::{Cli, Commands};
use crate::commands::shortest::SingleSource;
use crate::commands::{info, ordering, shortest, spanning, Output};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(elapsed = ?start.elapsed(), "resolve_config");

    let opts = LoadOptions {
        default_directed: config.graph.directed,
        force_undirected: cli.undirected,
    };
    let loaded = load_graph(cli.command.file(), &opts)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    let out = Output {
        format: cli.format,
        quiet: cli.quiet,
        precision: config.output.precision,
    };
    let graph = &loaded.graph;

    let result = match &cli.command {
        Commands::Dijkstra { from, .. } => {
            shortest::execute_single_source(&out, graph, from, SingleSource::Dijkstra)
        }
        Commands::BellmanFord { from, .. } => {
            shortest::execute_single_source(&out, graph, from, SingleSource::BellmanFord)
        }
        Commands::Astar { from, to, .. } => {
            shortest::execute_astar(&out, graph, loaded.heuristic.as_ref(), from, to)
        }
        Commands::FloydWarshall { .. } => shortest::execute_all_pairs(&out, graph, &config.limits),
        Commands::Kruskal { .. } => spanning::execute(&out, graph, None),
        Commands::Prim { from, .. } => spanning::execute(&out, graph, Some(from.as_str())),
        Commands::Toposort { .. } => ordering::execute_toposort(&out, graph),
        Commands::Scc { condense, .. } => ordering::execute_scc(&out, graph, *condense),
        Commands::Info { .. } => info::execute(&out, &loaded),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "run_command");
    result
}
