//! Spanning tree commands: kruskal, prim

use lodestar_core::error::Result;
use lodestar_core::graph::{kruskal, prim, Graph, SpanningForest};
use serde_json::json;

use super::Output;

/// Execute kruskal (`start == None`) or prim from `start`
pub fn execute(out: &Output, graph: &Graph<String>, start: Option<&str>) -> Result<()> {
    let (algorithm, forest) = match start {
        None => ("kruskal", kruskal(graph)?),
        Some(start) => ("prim", prim(graph, &start.to_string())?),
    };

    crate::output_by_format!(out.format,
        json => {
            out.print_json(&json!({
                "algorithm": algorithm,
                "edges": forest.edges,
                "total_weight": forest.total_weight(),
                "component_count": forest.component_count,
                "covered": forest.covered,
                "node_count": forest.node_count,
                "spanning_tree": forest.is_spanning_tree(),
            }))?;
        },
        human => { print_forest(out, algorithm, &forest); }
    );
    Ok(())
}

fn print_forest(out: &Output, algorithm: &str, forest: &SpanningForest<String>) {
    for edge in &forest.edges {
        println!("{} - {}  {}", edge.from, edge.to, out.number(edge.weight));
    }

    let shape = if forest.is_spanning_tree() {
        "spanning tree".to_string()
    } else if forest.covered < forest.node_count {
        format!("covers {} of {} nodes", forest.covered, forest.node_count)
    } else {
        format!("forest of {} trees", forest.component_count)
    };
    out.header(format!(
        "{}: total weight {} over {} edge(s), {}",
        algorithm,
        out.number(forest.total_weight()),
        forest.edges.len(),
        shape
    ));
}
