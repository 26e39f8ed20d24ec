//! Strongly connected components (Tarjan)
//!
//! The depth-first search runs on an explicit frame stack of
//! `(node, next edge position)` pairs, so graph depth is bounded by heap
//! memory rather than the thread's call stack.

use std::time::Instant;

use crate::error::Result;
use crate::graph::model::{Graph, NodeId, NodeIndex};
use crate::graph::types::Components;
use crate::trace_time;

/// Per-query Tarjan bookkeeping
struct TarjanState {
    /// Next discovery index to hand out
    counter: usize,
    index: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    components: Vec<Vec<NodeIndex>>,
}

impl TarjanState {
    fn new(node_count: usize) -> Self {
        Self {
            counter: 0,
            index: vec![None; node_count],
            low: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: NodeIndex) {
        self.index[v] = Some(self.counter);
        self.low[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Pop `root`'s component off the node stack
    fn emit(&mut self, root: NodeIndex) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        component.sort_unstable();
        self.components.push(component);
    }
}

fn strong_connect<N: NodeId>(graph: &Graph<N>, state: &mut TarjanState, root: NodeIndex) {
    let mut frames: Vec<(NodeIndex, usize)> = vec![(root, 0)];
    state.discover(root);

    while let Some(frame) = frames.last_mut() {
        let (v, pos) = *frame;
        let edges = graph.out_edges(v);

        if pos < edges.len() {
            frame.1 += 1;
            let w = edges[pos].to;
            match state.index[w] {
                None => {
                    state.discover(w);
                    frames.push((w, 0));
                }
                Some(iw) if state.on_stack[w] => {
                    state.low[v] = state.low[v].min(iw);
                }
                Some(_) => {}
            }
            continue;
        }

        frames.pop();
        if let Some(&(parent, _)) = frames.last() {
            state.low[parent] = state.low[parent].min(state.low[v]);
        }
        if Some(state.low[v]) == state.index[v] {
            state.emit(v);
        }
    }
}

/// Partition the graph into strongly connected components.
///
/// Every node lands in exactly one component. Components come out in reverse
/// topological order of the condensation (sinks first), with members listed
/// in node insertion order. Search roots are tried in insertion order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn tarjan_scc<N: NodeId>(graph: &Graph<N>) -> Result<Components<N>> {
    let start = Instant::now();
    let n = graph.node_count();
    let mut state = TarjanState::new(n);

    for root in 0..n {
        if state.index[root].is_none() {
            strong_connect(graph, &mut state, root);
        }
    }

    let mut membership = vec![0; n];
    let components: Vec<Vec<N>> = state
        .components
        .iter()
        .enumerate()
        .map(|(c, members)| {
            members
                .iter()
                .map(|&u| {
                    membership[u] = c;
                    graph.node(u).clone()
                })
                .collect()
        })
        .collect();

    tracing::debug!(components = components.len(), "scc_found");
    trace_time!(start, "tarjan_scc");
    Ok(Components::new(components, membership, graph.index_map()))
}
