//! Shortest-path commands: dijkstra, bellman-ford, astar, floyd-warshall

use std::collections::HashMap;

use lodestar_core::config::LimitsConfig;
use lodestar_core::error::Result;
use lodestar_core::graph::{
    astar_with_estimates, bellman_ford, dijkstra, floyd_warshall, AllPairs, AllPairsOptions,
    Graph, PathResult, ShortestPaths,
};
use serde_json::json;

use super::{json_distance, Output};

/// Single-source algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSource {
    Dijkstra,
    BellmanFord,
}

impl SingleSource {
    pub fn name(self) -> &'static str {
        match self {
            SingleSource::Dijkstra => "dijkstra",
            SingleSource::BellmanFord => "bellman-ford",
        }
    }
}

/// Execute dijkstra or bellman-ford
pub fn execute_single_source(
    out: &Output,
    graph: &Graph<String>,
    from: &str,
    algorithm: SingleSource,
) -> Result<()> {
    let source = from.to_string();
    let paths = match algorithm {
        SingleSource::Dijkstra => dijkstra(graph, &source)?,
        SingleSource::BellmanFord => bellman_ford(graph, &source)?,
    };

    crate::output_by_format!(out.format,
        json => { out.print_json(&single_source_json(algorithm, &paths)?)?; },
        human => { print_single_source(out, algorithm, &paths)?; }
    );
    Ok(())
}

fn single_source_json(
    algorithm: SingleSource,
    paths: &ShortestPaths<String>,
) -> Result<serde_json::Value> {
    let mut nodes = Vec::new();
    for (node, distance) in paths.iter() {
        nodes.push(json!({
            "node": node,
            "distance": json_distance(distance),
            "path": paths.path_to(node)?,
        }));
    }
    Ok(json!({
        "algorithm": algorithm.name(),
        "source": paths.source(),
        "nodes": nodes,
    }))
}

fn print_single_source(
    out: &Output,
    algorithm: SingleSource,
    paths: &ShortestPaths<String>,
) -> Result<()> {
    let total = paths.iter().count();
    let reachable = paths.reachable().count();
    out.header(format!(
        "{} from {} ({} of {} nodes reachable)",
        algorithm.name(),
        paths.source(),
        reachable,
        total
    ));

    let width = paths.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (node, distance) in paths.iter() {
        match paths.path_to(node)? {
            Some(path) => println!(
                "{:<width$}  {}  {}",
                node,
                out.number(distance),
                path.join(" -> "),
                width = width
            ),
            None => println!("{:<width$}  {}", node, out.number(distance), width = width),
        }
    }
    Ok(())
}

/// Execute astar using the graph file's heuristic table (0 where absent)
pub fn execute_astar(
    out: &Output,
    graph: &Graph<String>,
    heuristic: Option<&HashMap<String, f64>>,
    from: &str,
    to: &str,
) -> Result<()> {
    let empty = HashMap::new();
    let estimates = heuristic.unwrap_or_else(|| {
        tracing::debug!("no heuristic table, searching with h = 0");
        &empty
    });

    let result = astar_with_estimates(graph, &from.to_string(), &to.to_string(), estimates)?;

    crate::output_by_format!(out.format,
        json => {
            let mut value = serde_json::to_value(&result)?;
            value["algorithm"] = json!("astar");
            out.print_json(&value)?;
        },
        human => { print_path_result(out, &result); }
    );
    Ok(())
}

fn print_path_result(out: &Output, result: &PathResult<String>) {
    match result.cost {
        Some(cost) if result.found => {
            println!("{}", result.path.join(" -> "));
            out.header(format!(
                "cost {} over {} edge(s), {} node(s) expanded",
                out.number(cost),
                result.path_length(),
                result.expanded
            ));
        }
        _ => {
            println!("no path from {} to {}", result.from, result.to);
            out.header(format!("{} node(s) expanded", result.expanded));
        }
    }
}

/// Execute floyd-warshall
pub fn execute_all_pairs(out: &Output, graph: &Graph<String>, limits: &LimitsConfig) -> Result<()> {
    let all = floyd_warshall(graph, &AllPairsOptions::from(limits))?;

    crate::output_by_format!(out.format,
        json => { out.print_json(&all_pairs_json(&all)?)?; },
        human => { print_matrix(out, &all)?; }
    );
    Ok(())
}

fn all_pairs_json(all: &AllPairs<String>) -> Result<serde_json::Value> {
    let mut rows = Vec::with_capacity(all.nodes().len());
    for from in all.nodes() {
        let row: Vec<Option<f64>> = all.row(from)?.map(|(_, d)| json_distance(d)).collect();
        rows.push(row);
    }
    Ok(json!({
        "algorithm": "floyd-warshall",
        "nodes": all.nodes(),
        "distances": rows,
    }))
}

fn print_matrix(out: &Output, all: &AllPairs<String>) -> Result<()> {
    let cell = |d: f64| {
        if d.is_finite() {
            out.number(d)
        } else {
            "-".to_string()
        }
    };

    let mut body = Vec::with_capacity(all.nodes().len());
    for from in all.nodes() {
        let cells: Vec<String> = all.row(from)?.map(|(_, d)| cell(d)).collect();
        body.push((from, cells));
    }

    let label_width = all.nodes().iter().map(String::len).max().unwrap_or(0);
    let width = body
        .iter()
        .flat_map(|(_, cells)| cells.iter().map(String::len))
        .chain(all.nodes().iter().map(String::len))
        .max()
        .unwrap_or(0);

    let header: Vec<String> = all
        .nodes()
        .iter()
        .map(|n| format!("{:>width$}", n, width = width))
        .collect();
    out.header(format!(
        "{:<label_width$}  {}",
        "",
        header.join("  "),
        label_width = label_width
    ));

    for (from, cells) in body {
        let cells: Vec<String> = cells
            .iter()
            .map(|c| format!("{:>width$}", c, width = width))
            .collect();
        println!(
            "{:<label_width$}  {}",
            from,
            cells.join("  "),
            label_width = label_width
        );
    }
    Ok(())
}
