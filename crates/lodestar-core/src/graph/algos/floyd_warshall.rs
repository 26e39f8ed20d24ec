//! Floyd-Warshall all-pairs shortest paths.
//!
//! Matrix initialisation:
//!   dist[i][i] = 0
//!   dist[i][j] = lightest direct edge i -> j, or +inf
//!
//! Relaxation, for every intermediate k:
//!   dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])
//!
//! A negative diagonal entry afterwards means a negative cycle through i.
//!
//! O(V^3) time and O(V^2) memory. Graphs above `AllPairsOptions::max_nodes`
//! are rejected up front; a few thousand nodes is the practical ceiling.

use std::time::Instant;

use crate::config::{LimitsConfig, DEFAULT_APSP_MAX_NODES};
use crate::error::{LodestarError, Result};
use crate::graph::model::{Graph, NodeId, NodeIndex};
use crate::graph::types::{AllPairs, UNREACHABLE};
use crate::trace_time;

/// Limits for all-pairs queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllPairsOptions {
    pub max_nodes: usize,
}

impl Default for AllPairsOptions {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_APSP_MAX_NODES,
        }
    }
}

impl From<&LimitsConfig> for AllPairsOptions {
    fn from(limits: &LimitsConfig) -> Self {
        Self {
            max_nodes: limits.apsp_max_nodes,
        }
    }
}

/// Distances between every ordered pair of nodes.
///
/// Fails with `GraphTooLarge` above the node limit and with `NegativeCycle`
/// if any cycle has negative total weight; the matrix is discarded then.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn floyd_warshall<N: NodeId>(graph: &Graph<N>, opts: &AllPairsOptions) -> Result<AllPairs<N>> {
    let start = Instant::now();
    let n = graph.node_count();
    if n > opts.max_nodes {
        return Err(LodestarError::GraphTooLarge {
            algorithm: "floyd-warshall",
            nodes: n,
            limit: opts.max_nodes,
        });
    }

    let mut dist = vec![UNREACHABLE; n * n];
    let mut next: Vec<Option<NodeIndex>> = vec![None; n * n];

    for i in 0..n {
        dist[i * n + i] = 0.0;
        next[i * n + i] = Some(i);
    }
    for edge in graph.edges() {
        let cell = edge.from * n + edge.to;
        if edge.weight < dist[cell] {
            dist[cell] = edge.weight;
            next[cell] = Some(edge.to);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if !dik.is_finite() {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k * n + j];
                if !dkj.is_finite() {
                    continue;
                }
                let candidate = dik + dkj;
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    if let Some(i) = (0..n).find(|&i| dist[i * n + i] < 0.0) {
        let node = graph.node(i);
        tracing::debug!(node = ?node, "negative_cycle");
        return Err(LodestarError::negative_cycle("floyd-warshall", node));
    }

    trace_time!(start, "floyd_warshall");
    Ok(AllPairs::new(graph.nodes().to_vec(), graph.index_map(), dist, next))
}
