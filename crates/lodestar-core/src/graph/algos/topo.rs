//! Topological ordering (Kahn's algorithm)

use std::collections::VecDeque;
use std::time::Instant;

use crate::error::{LodestarError, Result};
use crate::graph::model::{Graph, NodeId};
use crate::trace_time;

/// Order nodes so every edge points forward.
///
/// Zero in-degree nodes are seeded in insertion order and processed FIFO,
/// so the result is deterministic. Weights are ignored. A cycle leaves some
/// nodes with positive in-degree; the query then fails with `CycleDetected`
/// carrying how many nodes were never ordered.
///
/// On an undirected graph every edge is a two-node cycle, so only edgeless
/// undirected graphs have an order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn topological_sort<N: NodeId>(graph: &Graph<N>) -> Result<Vec<N>> {
    let start = Instant::now();
    let n = graph.node_count();

    let mut in_degree = vec![0usize; n];
    for edge in graph.edges() {
        in_degree[edge.to] += 1;
    }

    let mut ready: VecDeque<_> = (0..n).filter(|&u| in_degree[u] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = ready.pop_front() {
        order.push(u);
        for edge in graph.out_edges(u) {
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                ready.push_back(edge.to);
            }
        }
    }

    if order.len() < n {
        let unordered = n - order.len();
        tracing::debug!(unordered, "cycle_detected");
        return Err(LodestarError::CycleDetected { unordered });
    }

    trace_time!(start, "topological_sort");
    Ok(order.into_iter().map(|u| graph.node(u).clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn position<N: PartialEq>(order: &[N], node: &N) -> usize {
        order.iter().position(|n| n == node).unwrap()
    }

    #[test]
    fn test_order_respects_every_edge() {
        let graph = Graph::from_edges(
            true,
            [
                ("shirt", "tie", 1.0),
                ("tie", "jacket", 1.0),
                ("trousers", "shoes", 1.0),
                ("trousers", "belt", 1.0),
                ("belt", "jacket", 1.0),
                ("shirt", "belt", 1.0),
                ("socks", "shoes", 1.0),
            ],
        )
        .unwrap();

        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), graph.node_count());
        for edge in graph.edges() {
            let from = graph.node(edge.from);
            let to = graph.node(edge.to);
            assert!(
                position(&order, from) < position(&order, to),
                "{} must precede {}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_deterministic_fifo_order() {
        let graph =
            Graph::from_edges(true, [("A", "C", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_two_cycle_detected() {
        let graph = Graph::from_edges(true, [("A", "B", 1.0), ("B", "A", 1.0)]).unwrap();
        let err = topological_sort(&graph).unwrap_err();
        assert!(matches!(err, LodestarError::CycleDetected { unordered: 2 }));
    }

    #[test]
    fn test_cycle_downstream_of_dag_part() {
        // R orders fine; X, Y, Z are stuck behind the X -> Y -> Z -> X cycle
        let graph = Graph::from_edges(
            true,
            [
                ("R", "X", 1.0),
                ("X", "Y", 1.0),
                ("Y", "Z", 1.0),
                ("Z", "X", 1.0),
            ],
        )
        .unwrap();
        assert!(matches!(
            topological_sort(&graph),
            Err(LodestarError::CycleDetected { unordered: 3 })
        ));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = Graph::from_edges(true, [("A", "A", 1.0)]).unwrap();
        assert!(topological_sort(&graph).is_err());
    }

    #[test]
    fn test_isolated_nodes_and_empty_graph() {
        let mut builder = GraphBuilder::directed();
        builder.add_node("B");
        builder.add_node("A");
        let graph = builder.build();
        assert_eq!(topological_sort(&graph).unwrap(), vec!["B", "A"]);

        let empty: Graph<&str> = GraphBuilder::directed().build();
        assert!(topological_sort(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_undirected_edge_is_a_cycle() {
        let graph = Graph::from_edges(false, [("A", "B", 1.0)]).unwrap();
        assert!(matches!(
            topological_sort(&graph),
            Err(LodestarError::CycleDetected { unordered: 2 })
        ));
    }

    #[test]
    fn test_parallel_edges_counted() {
        let graph = Graph::from_edges(true, [("A", "B", 1.0), ("A", "B", 2.0)]).unwrap();
        assert_eq!(topological_sort(&graph).unwrap(), vec!["A", "B"]);
    }
}
