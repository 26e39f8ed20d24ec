//! Ordering commands: toposort, scc

use lodestar_core::error::Result;
use lodestar_core::graph::{tarjan_scc, topological_sort, Graph};
use serde_json::json;

use super::Output;

/// Execute toposort
pub fn execute_toposort(out: &Output, graph: &Graph<String>) -> Result<()> {
    let order = topological_sort(graph)?;

    crate::output_by_format!(out.format,
        json => { out.print_json(&json!({ "order": order }))?; },
        human => {
            for node in &order {
                println!("{}", node);
            }
        }
    );
    Ok(())
}

/// Execute scc, optionally with the condensation DAG
pub fn execute_scc(out: &Output, graph: &Graph<String>, condense: bool) -> Result<()> {
    let components = tarjan_scc(graph)?;
    let condensation = condense
        .then(|| components.condensation(graph))
        .transpose()?;

    crate::output_by_format!(out.format,
        json => {
            let mut value = json!({ "components": components.iter().collect::<Vec<_>>() });
            if let Some(dag) = &condensation {
                value["condensation"] = json!({
                    "edges": dag.edges,
                    "order": dag.topological_order(),
                });
            }
            out.print_json(&value)?;
        },
        human => {
            out.header(format!("{} component(s)", components.len()));
            for (i, members) in components.iter().enumerate() {
                println!("{}: {}", i, members.join(", "));
            }
            if let Some(dag) = &condensation {
                out.header("condensation:");
                for (from, to) in &dag.edges {
                    println!("{} -> {}", from, to);
                }
                let order: Vec<String> =
                    dag.topological_order().iter().map(usize::to_string).collect();
                println!("order: {}", order.join(" "));
            }
        }
    );
    Ok(())
}
