//! A* goal-directed shortest path
//!
//! Optimal for admissible heuristics (never overestimating the remaining
//! cost). Consistency is not required: a node whose g-cost improves after
//! it was expanded is pushed and expanded again.

use std::collections::HashMap;
use std::time::Instant;

use crate::error::{LodestarError, Result};
use crate::graph::model::{Graph, NodeId, NodeIndex};
use crate::graph::path::reconstruct_path;
use crate::graph::queue::MinQueue;
use crate::graph::types::{PathResult, UNREACHABLE};
use crate::logging::QueryMetrics;
use crate::{log_query_metrics, trace_time};

/// Queue item: node plus the g-cost it was pushed with
#[derive(Debug, Clone, Copy)]
struct Frontier {
    node: NodeIndex,
    g: f64,
}

struct AStarState {
    g_cost: Vec<f64>,
    estimate: Vec<Option<f64>>,
    pred: Vec<Option<NodeIndex>>,
    open: MinQueue<Frontier>,
    expanded: usize,
    metrics: QueryMetrics,
}

impl AStarState {
    fn new(node_count: usize) -> Self {
        Self {
            g_cost: vec![UNREACHABLE; node_count],
            estimate: vec![None; node_count],
            pred: vec![None; node_count],
            open: MinQueue::new(),
            expanded: 0,
            metrics: QueryMetrics::new(),
        }
    }

    fn push(&mut self, node: NodeIndex, g: f64, h: f64) {
        self.metrics.record_push();
        self.open.push(g + h, Frontier { node, g });
    }
}

/// Heuristic values are computed at most once per node and validated
fn estimate_for<N, H>(
    graph: &Graph<N>,
    state: &mut AStarState,
    heuristic: &mut H,
    node: NodeIndex,
) -> Result<f64>
where
    N: NodeId,
    H: FnMut(&N) -> f64,
{
    if let Some(h) = state.estimate[node] {
        return Ok(h);
    }
    let id = graph.node(node);
    let h = heuristic(id);
    if !h.is_finite() || h < 0.0 {
        return Err(LodestarError::invalid_heuristic(id, h));
    }
    state.estimate[node] = Some(h);
    Ok(h)
}

/// Shortest path from `source` to `goal` guided by `heuristic`.
///
/// The heuristic must return a finite, non-negative estimate of the cost
/// from a node to `goal`; anything else fails with `InvalidHeuristic`.
/// Negative edge weights fail with `NegativeWeight`. An unreachable goal
/// yields `found == false` and an empty path.
#[tracing::instrument(skip(graph, heuristic), fields(nodes = graph.node_count()))]
pub fn astar<N, H>(
    graph: &Graph<N>,
    source: &N,
    goal: &N,
    mut heuristic: H,
) -> Result<PathResult<N>>
where
    N: NodeId,
    H: FnMut(&N) -> f64,
{
    let start = Instant::now();
    let source_idx = graph.index_of(source)?;
    let goal_idx = graph.index_of(goal)?;
    graph.require_non_negative()?;

    let mut state = AStarState::new(graph.node_count());
    state.g_cost[source_idx] = 0.0;
    let h0 = estimate_for(graph, &mut state, &mut heuristic, source_idx)?;
    state.push(source_idx, 0.0, h0);

    loop {
        let g_cost = &state.g_cost;
        let metrics = &state.metrics;
        let Some((_, current)) = state
            .open
            .pop_fresh(|_, f| f.g > g_cost[f.node], || metrics.record_stale_pop())
        else {
            break;
        };
        state.expanded += 1;

        if current.node == goal_idx {
            let path = reconstruct_path(source_idx, goal_idx, &state.pred)
                .unwrap_or_default()
                .into_iter()
                .map(|i| graph.node(i).clone())
                .collect();
            tracing::debug!(cost = current.g, expanded = state.expanded, "path_found");
            log_query_metrics!(&state.metrics, "astar");
            trace_time!(start, "astar");
            return Ok(PathResult {
                from: source.clone(),
                to: goal.clone(),
                found: true,
                path,
                cost: Some(current.g),
                expanded: state.expanded,
            });
        }

        for edge in graph.out_edges(current.node) {
            let tentative_g = current.g + edge.weight;
            if tentative_g < state.g_cost[edge.to] {
                state.g_cost[edge.to] = tentative_g;
                state.pred[edge.to] = Some(current.node);
                let h = estimate_for(graph, &mut state, &mut heuristic, edge.to)?;
                state.metrics.record_relaxation();
                state.push(edge.to, tentative_g, h);
            }
        }
    }

    tracing::debug!(expanded = state.expanded, "no_path_found");
    log_query_metrics!(&state.metrics, "astar");
    trace_time!(start, "astar");
    Ok(PathResult {
        from: source.clone(),
        to: goal.clone(),
        found: false,
        path: Vec::new(),
        cost: None,
        expanded: state.expanded,
    })
}

/// A* with a precomputed estimate table. Nodes missing from the table are
/// estimated at 0, which keeps the heuristic admissible.
pub fn astar_with_estimates<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    goal: &N,
    estimates: &HashMap<N, f64>,
) -> Result<PathResult<N>> {
    astar(graph, source, goal, |node| {
        estimates.get(node).copied().unwrap_or(0.0)
    })
}
