//! Info command: summarize a loaded graph

use lodestar_core::error::{LodestarError, Result};
use lodestar_core::graph::{tarjan_scc, topological_sort, LoadedGraph};
use serde_json::json;

use super::Output;

/// Execute info
pub fn execute(out: &Output, loaded: &LoadedGraph) -> Result<()> {
    let graph = &loaded.graph;

    // An undirected graph with an edge is never acyclic; Kahn reports that as a cycle
    let acyclic = match topological_sort(graph) {
        Ok(_) => true,
        Err(LodestarError::CycleDetected { .. }) => false,
        Err(e) => return Err(e),
    };
    let components = tarjan_scc(graph)?.len();
    let lightest = graph.min_weight_edge().map(|e| {
        (
            graph.node(e.from).as_str(),
            graph.node(e.to).as_str(),
            e.weight,
        )
    });
    let heuristic_entries = loaded.heuristic.as_ref().map_or(0, |h| h.len());

    crate::output_by_format!(out.format,
        json => {
            out.print_json(&json!({
                "directed": graph.is_directed(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "negative_weights": graph.has_negative_weight(),
                "min_weight_edge": lightest.map(|(from, to, weight)| json!({
                    "from": from,
                    "to": to,
                    "weight": weight,
                })),
                "acyclic": acyclic,
                "strongly_connected_components": components,
                "heuristic_entries": heuristic_entries,
            }))?;
        },
        human => {
            println!("directed:   {}", graph.is_directed());
            println!("nodes:      {}", graph.node_count());
            println!("edges:      {}", graph.edge_count());
            println!("negative:   {}", graph.has_negative_weight());
            if let Some((from, to, weight)) = lightest {
                println!("lightest:   {} -> {} ({})", from, to, out.number(weight));
            }
            println!("acyclic:    {}", acyclic);
            println!("sccs:       {}", components);
            if heuristic_entries > 0 {
                println!("heuristic:  {} entries", heuristic_entries);
            }
        }
    );
    Ok(())
}
