//! Minimum spanning trees and forests
//!
//! Kruskal sorts every edge and joins components with a disjoint-set union,
//! so it always covers the whole graph and yields a forest when the graph is
//! disconnected. Prim grows a single tree from its start node and never
//! leaves that node's component.
//!
//! Kruskal accepts negative weights. Prim, like Dijkstra, rejects a graph with
//! any negative edge up front.
//!
//! Both treat edges as undirected: the mirror half of an undirected edge is
//! skipped by Kruskal, and on directed graphs each stored edge is considered
//! on its own.

use std::time::Instant;

use crate::error::Result;
use crate::graph::dsu::DisjointSet;
use crate::graph::model::{EdgeRef, Graph, NodeId, NodeIndex};
use crate::graph::queue::MinQueue;
use crate::graph::types::{SpanningEdge, SpanningForest};
use crate::logging::QueryMetrics;
use crate::{log_query_metrics, trace_time};

fn spanning_edge<N: NodeId>(graph: &Graph<N>, edge: &EdgeRef) -> SpanningEdge<N> {
    SpanningEdge {
        from: graph.node(edge.from).clone(),
        to: graph.node(edge.to).clone(),
        weight: edge.weight,
    }
}

/// Minimum spanning forest over every node.
///
/// Edges are sorted by weight, ties broken by insertion order, so the output
/// is reproducible. O(E log E).
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn kruskal<N: NodeId>(graph: &Graph<N>) -> Result<SpanningForest<N>> {
    let start = Instant::now();
    let n = graph.node_count();

    let mut candidates: Vec<&EdgeRef> = graph.edges().filter(|e| !e.mirror).collect();
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.seq.cmp(&b.seq)));

    let mut dsu = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    for edge in candidates {
        if dsu.union(edge.from, edge.to) {
            edges.push(spanning_edge(graph, edge));
            if edges.len() + 1 == n {
                break;
            }
        }
    }

    let forest = SpanningForest {
        edges,
        component_count: dsu.set_count(),
        covered: n,
        node_count: n,
    };

    tracing::debug!(
        kept = forest.edges.len(),
        components = forest.component_count,
        "spanning_forest"
    );
    trace_time!(start, "kruskal");
    Ok(forest)
}

/// Minimum spanning tree of the component containing `start`.
///
/// Nodes outside that component are not covered; compare `covered` with
/// `node_count` (or use `kruskal`) when the graph may be disconnected.
///
/// # Errors
///
/// `UnknownNode` for a missing start, `NegativeWeight` if any edge is negative.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn prim<N: NodeId>(graph: &Graph<N>, start: &N) -> Result<SpanningForest<N>> {
    let started = Instant::now();
    let root = graph.index_of(start)?;
    graph.require_non_negative()?;
    let n = graph.node_count();

    let mut visited = vec![false; n];
    let mut queue: MinQueue<&EdgeRef> = MinQueue::new();
    let metrics = QueryMetrics::new();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    let visit = |u: NodeIndex, visited: &mut [bool], queue: &mut MinQueue<_>| {
        visited[u] = true;
        for edge in graph.out_edges(u) {
            if !visited[edge.to] {
                metrics.record_push();
                queue.push(edge.weight, edge);
            }
        }
    };

    visit(root, &mut visited, &mut queue);
    let mut covered = 1;

    loop {
        let Some((_, edge)) =
            queue.pop_fresh(|_, e| visited[e.to], || metrics.record_stale_pop())
        else {
            break;
        };
        edges.push(spanning_edge(graph, edge));
        covered += 1;
        visit(edge.to, &mut visited, &mut queue);
    }

    log_query_metrics!(&metrics, "prim");
    trace_time!(started, "prim");
    Ok(SpanningForest {
        edges,
        component_count: 1,
        covered,
        node_count: n,
    })
}
