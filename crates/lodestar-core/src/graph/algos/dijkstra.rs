use std::time::Instant;

use super::shared::Tentative;
use crate::error::Result;
use crate::graph::model::{Graph, NodeId, NodeIndex};
use crate::graph::queue::MinQueue;
use crate::graph::types::ShortestPaths;
use crate::logging::QueryMetrics;
use crate::{log_query_metrics, trace_time};

/// State tracked during a Dijkstra query
struct DijkstraState {
    tentative: Tentative,
    queue: MinQueue<NodeIndex>,
    metrics: QueryMetrics,
}

impl DijkstraState {
    fn new(node_count: usize, source: NodeIndex) -> Self {
        let mut state = Self {
            tentative: Tentative::new(node_count, source),
            queue: MinQueue::with_capacity(node_count),
            metrics: QueryMetrics::new(),
        };
        state.push(0.0, source);
        state
    }

    fn push(&mut self, priority: f64, node: NodeIndex) {
        self.metrics.record_push();
        self.queue.push(priority, node);
    }

    /// Next node whose popped priority still matches its recorded distance
    fn pop_settled(&mut self) -> Option<(f64, NodeIndex)> {
        let dist = &self.tentative.dist;
        let metrics = &self.metrics;
        self.queue
            .pop_fresh(|d, &u| d > dist[u], || metrics.record_stale_pop())
    }
}

/// Single-source shortest paths over non-negative weights.
///
/// Fails with `UnknownNode` if `source` is absent and with `NegativeWeight`
/// before any relaxation if the graph holds a negative edge. Unreachable
/// nodes keep an infinite distance. O((V + E) log V).
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra<N: NodeId>(graph: &Graph<N>, source: &N) -> Result<ShortestPaths<N>> {
    let start = Instant::now();
    let source_idx = graph.index_of(source)?;
    graph.require_non_negative()?;

    let mut state = DijkstraState::new(graph.node_count(), source_idx);

    while let Some((d, u)) = state.pop_settled() {
        for edge in graph.out_edges(u) {
            if state.tentative.relax(u, edge.to, edge.weight) {
                state.metrics.record_relaxation();
                state.push(d + edge.weight, edge.to);
            }
        }
    }

    log_query_metrics!(&state.metrics, "dijkstra");
    trace_time!(start, "dijkstra");
    Ok(state.tentative.into_result(graph, source_idx))
}

#[cfg(test)]
mod tests;
