//! Bellman-Ford single-source shortest paths.
//!
//! Relax every edge up to |V| - 1 times, stopping early once a full pass
//! changes nothing. One extra pass then checks for a negative cycle
//! reachable from the source: if any edge still relaxes, distances are
//! undefined and the query fails instead of returning them.
//!
//! Complexity: O(V * E)

use std::time::Instant;

use super::shared::Tentative;
use crate::error::{LodestarError, Result};
use crate::graph::model::{Graph, NodeId};
use crate::graph::types::ShortestPaths;
use crate::logging::QueryMetrics;
use crate::{log_query_metrics, trace_time};

/// Single-source shortest paths tolerating negative weights.
///
/// Fails with `NegativeCycle` when a negative cycle is reachable from
/// `source`. Negative cycles elsewhere in the graph do not affect the result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bellman_ford<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    let start = Instant::now();
    let source_idx = graph.index_of(source)?;
    let n = graph.node_count();

    let mut tentative = Tentative::new(n, source_idx);
    let metrics = QueryMetrics::new();

    let mut passes = 0;
    for _ in 1..n {
        passes += 1;
        let mut updated = false;
        for edge in graph.edges() {
            if tentative.relax(edge.from, edge.to, edge.weight) {
                metrics.record_relaxation();
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    tracing::trace!(passes, "relaxation_passes");

    // |V|-th pass: any further improvement means a reachable negative cycle
    for edge in graph.edges() {
        let du = tentative.dist[edge.from];
        if du.is_finite() && du + edge.weight < tentative.dist[edge.to] {
            let node = graph.node(edge.to);
            tracing::debug!(node = ?node, "negative_cycle");
            return Err(LodestarError::negative_cycle("bellman-ford", node));
        }
    }

    log_query_metrics!(&metrics, "bellman_ford");
    trace_time!(start, "bellman_ford");
    Ok(tentative.into_result(graph, source_idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_negative_edges_without_cycle() {
        let graph = Graph::from_edges(
            true,
            [
                ("S", "A", 4.0),
                ("S", "B", 5.0),
                ("B", "A", -3.0),
                ("A", "C", 2.0),
            ],
        )
        .unwrap();

        let result = bellman_ford(&graph, &"S").unwrap();
        assert_eq!(result.distance(&"A").unwrap(), 2.0);
        assert_eq!(result.distance(&"C").unwrap(), 4.0);
        assert_eq!(result.path_to(&"C").unwrap(), Some(vec!["S", "B", "A", "C"]));
    }

    #[test]
    fn test_reachable_negative_cycle_detected() {
        let graph = Graph::from_edges(
            true,
            [
                ("S", "A", 1.0),
                ("A", "B", 1.0),
                ("B", "C", -3.0),
                ("C", "A", 1.0),
            ],
        )
        .unwrap();

        let err = bellman_ford(&graph, &"S").unwrap_err();
        assert!(matches!(
            err,
            LodestarError::NegativeCycle {
                algorithm: "bellman-ford",
                ..
            }
        ));
    }

    #[test]
    fn test_unreachable_negative_cycle_ignored() {
        let graph = Graph::from_edges(
            true,
            [
                ("S", "A", 2.0),
                ("X", "Y", -1.0),
                ("Y", "X", -1.0),
            ],
        )
        .unwrap();

        let result = bellman_ford(&graph, &"S").unwrap();
        assert_eq!(result.distance(&"A").unwrap(), 2.0);
        assert!(result.distance(&"X").unwrap().is_infinite());
    }

    #[test]
    fn test_undirected_negative_edge_is_a_cycle() {
        // An undirected negative edge is a two-edge negative cycle
        let graph = Graph::from_edges(false, [("A", "B", -1.0)]).unwrap();
        assert!(bellman_ford(&graph, &"A").is_err());
    }

    #[test]
    fn test_single_node() {
        let mut builder = GraphBuilder::directed();
        builder.add_node("solo");
        let graph = builder.build();
        let result = bellman_ford(&graph, &"solo").unwrap();
        assert_eq!(result.distance(&"solo").unwrap(), 0.0);
    }

    #[test]
    fn test_negative_self_loop() {
        let graph = Graph::from_edges(true, [("A", "A", -0.5)]).unwrap();
        assert!(matches!(
            bellman_ford(&graph, &"A"),
            Err(LodestarError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn test_unknown_source() {
        let graph = Graph::from_edges(true, [("A", "B", 1.0)]).unwrap();
        assert!(matches!(
            bellman_ford(&graph, &"Q"),
            Err(LodestarError::UnknownNode { .. })
        ));
    }
}
