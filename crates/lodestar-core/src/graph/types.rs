use std::collections::HashMap;

use serde::Serialize;

use super::model::{NodeId, NodeIndex};
use super::path::{follow_next_hops, reconstruct_path};
use crate::error::{LodestarError, Result};

/// Distance used for nodes no path reaches
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Single-source result: distance map plus predecessor map.
///
/// Owns copies of the node identifiers, so it outlives the graph borrow.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    source: NodeIndex,
    nodes: Vec<N>,
    index: HashMap<N, NodeIndex>,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeIndex>>,
}

impl<N: NodeId> ShortestPaths<N> {
    pub(crate) fn new(
        source: NodeIndex,
        nodes: Vec<N>,
        index: HashMap<N, NodeIndex>,
        distances: Vec<f64>,
        predecessors: Vec<Option<NodeIndex>>,
    ) -> Self {
        Self {
            source,
            nodes,
            index,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> &N {
        &self.nodes[self.source]
    }

    fn lookup(&self, node: &N) -> Result<NodeIndex> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| LodestarError::unknown_node(node))
    }

    /// Distance from the source; `UNREACHABLE` (+inf) if no path exists
    pub fn distance(&self, node: &N) -> Result<f64> {
        Ok(self.distances[self.lookup(node)?])
    }

    pub fn is_reachable(&self, node: &N) -> Result<bool> {
        Ok(self.distance(node)?.is_finite())
    }

    /// Previous node on the best path, `None` for the source and unreachable nodes
    pub fn predecessor(&self, node: &N) -> Result<Option<&N>> {
        let idx = self.lookup(node)?;
        Ok(self.predecessors[idx].map(|p| &self.nodes[p]))
    }

    /// Source-to-node path, `None` if the node is unreachable
    pub fn path_to(&self, node: &N) -> Result<Option<Vec<N>>> {
        let target = self.lookup(node)?;
        if !self.distances[target].is_finite() {
            return Ok(None);
        }
        Ok(reconstruct_path(self.source, target, &self.predecessors)
            .map(|path| path.into_iter().map(|i| self.nodes[i].clone()).collect()))
    }

    /// `(node, distance)` for every node, in graph order
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.nodes.iter().zip(self.distances.iter().copied())
    }

    /// Nodes with a finite distance
    pub fn reachable(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.iter().filter(|(_, d)| d.is_finite())
    }

    /// Distance map keyed by node
    pub fn to_map(&self) -> HashMap<N, f64> {
        self.iter().map(|(n, d)| (n.clone(), d)).collect()
    }
}

/// Goal-directed search result.
///
/// `found == false` with an empty path means the goal is unreachable; it is
/// a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub from: N,
    pub to: N,
    pub found: bool,
    pub path: Vec<N>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Queue entries accepted for expansion
    pub expanded: usize,
}

impl<N> PathResult<N> {
    /// Number of edges on the path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// All-pairs distance matrix with next-hop reconstruction
#[derive(Debug, Clone)]
pub struct AllPairs<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeIndex>,
    /// Row-major `n * n`
    distances: Vec<f64>,
    next: Vec<Option<NodeIndex>>,
}

impl<N: NodeId> AllPairs<N> {
    pub(crate) fn new(
        nodes: Vec<N>,
        index: HashMap<N, NodeIndex>,
        distances: Vec<f64>,
        next: Vec<Option<NodeIndex>>,
    ) -> Self {
        Self {
            nodes,
            index,
            distances,
            next,
        }
    }

    fn lookup(&self, node: &N) -> Result<NodeIndex> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| LodestarError::unknown_node(node))
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn distance(&self, from: &N, to: &N) -> Result<f64> {
        let i = self.lookup(from)?;
        let j = self.lookup(to)?;
        Ok(self.distances[i * self.nodes.len() + j])
    }

    /// Distances from `from` to every node, in graph order
    pub fn row(&self, from: &N) -> Result<impl Iterator<Item = (&N, f64)> + '_> {
        let n = self.nodes.len();
        let i = self.lookup(from)?;
        Ok(self
            .nodes
            .iter()
            .zip(self.distances[i * n..(i + 1) * n].iter().copied()))
    }

    /// Shortest path between two nodes, `None` if unreachable
    pub fn path(&self, from: &N, to: &N) -> Result<Option<Vec<N>>> {
        let i = self.lookup(from)?;
        let j = self.lookup(to)?;
        Ok(follow_next_hops(i, j, self.nodes.len(), &self.next)
            .map(|path| path.into_iter().map(|k| self.nodes[k].clone()).collect()))
    }
}

/// Edge kept in a spanning tree or forest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningEdge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

/// Minimum spanning forest.
///
/// Kruskal covers every node; Prim covers only the component of its start
/// node, so `covered` may be smaller than `node_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<N> {
    pub edges: Vec<SpanningEdge<N>>,
    /// Trees in the forest
    pub component_count: usize,
    /// Nodes reached by the forest
    pub covered: usize,
    /// Nodes in the graph
    pub node_count: usize,
}

impl<N> SpanningForest<N> {
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// A single tree touching every node of the graph
    pub fn is_spanning_tree(&self) -> bool {
        self.node_count > 0 && self.covered == self.node_count && self.component_count == 1
    }
}

/// Strongly connected components in reverse topological order of the
/// condensation graph
#[derive(Debug, Clone)]
pub struct Components<N> {
    components: Vec<Vec<N>>,
    /// Component index of each node, by dense node index
    membership: Vec<usize>,
    index: HashMap<N, NodeIndex>,
}

/// Component DAG: one vertex per component, deduplicated edges between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condensation {
    pub component_count: usize,
    pub edges: Vec<(usize, usize)>,
}

impl Condensation {
    /// Components ordered so every condensation edge points forward
    pub fn topological_order(&self) -> Vec<usize> {
        (0..self.component_count).rev().collect()
    }
}

impl<N: NodeId> Components<N> {
    pub(crate) fn new(
        components: Vec<Vec<N>>,
        membership: Vec<usize>,
        index: HashMap<N, NodeIndex>,
    ) -> Self {
        Self {
            components,
            membership,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.components.iter().map(Vec::as_slice)
    }

    pub fn into_vec(self) -> Vec<Vec<N>> {
        self.components
    }

    /// Index of the component containing `node`
    pub fn component_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .map(|&i| self.membership[i])
            .ok_or_else(|| LodestarError::unknown_node(node))
    }

    /// Build the component DAG from the graph these components came from.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if `graph` does not have the same nodes, in the same
    /// order, as the graph the components were computed on.
    pub fn condensation(&self, graph: &super::Graph<N>) -> Result<Condensation> {
        let same_nodes = graph.node_count() == self.membership.len()
            && graph
                .nodes()
                .iter()
                .enumerate()
                .all(|(i, node)| self.index.get(node) == Some(&i));
        if !same_nodes {
            return Err(LodestarError::invalid_value(
                "condensation graph",
                format!(
                    "{} nodes, not the graph these {} components came from",
                    graph.node_count(),
                    self.components.len()
                ),
            ));
        }

        let mut edges: Vec<(usize, usize)> = graph
            .edges()
            .map(|e| (self.membership[e.from], self.membership[e.to]))
            .filter(|(a, b)| a != b)
            .collect();
        edges.sort_unstable();
        edges.dedup();

        Ok(Condensation {
            component_count: self.components.len(),
            edges,
        })
    }
}
