//! Immutable weighted graph with dense node indices
//!
//! Nodes are translated to `0..V` once at build time and adjacency is stored
//! in compressed-sparse-row form, so the hot loops of every algorithm work on
//! plain slices instead of hash lookups.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{LodestarError, Result};

/// Dense node index assigned at build time
pub type NodeIndex = usize;

/// Bound satisfied by every type usable as a node identifier
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// A stored directed edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
    /// Insertion sequence, used as the deterministic tie-breaker
    pub seq: usize,
    /// Second half of an undirected edge
    pub mirror: bool,
}

/// Immutable weighted graph.
///
/// Safe to share across threads for concurrent queries: no query mutates it.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeIndex>,
    /// `offsets[u]..offsets[u + 1]` is the slot range of `u`'s outgoing edges
    offsets: Vec<usize>,
    slots: Vec<EdgeRef>,
    /// Slot position of each edge, by insertion sequence
    order: Vec<usize>,
    directed: bool,
}

impl<N: NodeId> Graph<N> {
    /// Build a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut builder = GraphBuilder::new(directed);
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges (undirected edges count twice)
    pub fn edge_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Translate a node to its dense index
    pub fn index_of(&self, node: &N) -> Result<NodeIndex> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| LodestarError::unknown_node(node))
    }

    /// Node stored at a dense index
    pub fn node(&self, index: NodeIndex) -> &N {
        &self.nodes[index]
    }

    /// Outgoing `(neighbor, weight)` pairs of a node
    pub fn neighbors<'a>(&'a self, node: &N) -> Result<impl Iterator<Item = (&'a N, f64)> + 'a> {
        let u = self.index_of(node)?;
        Ok(self
            .out_edges(u)
            .iter()
            .map(move |e| (&self.nodes[e.to], e.weight)))
    }

    /// Outgoing edges of a node by index
    pub fn out_edges(&self, u: NodeIndex) -> &[EdgeRef] {
        &self.slots[self.offsets[u]..self.offsets[u + 1]]
    }

    pub fn out_degree(&self, u: NodeIndex) -> usize {
        self.offsets[u + 1] - self.offsets[u]
    }

    /// Every stored edge in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRef> + '_ {
        self.order.iter().map(move |&slot| &self.slots[slot])
    }

    /// First negative edge in insertion order, if any
    pub fn first_negative_edge(&self) -> Option<&EdgeRef> {
        self.edges().find(|e| e.weight < 0.0)
    }

    pub fn has_negative_weight(&self) -> bool {
        self.slots.iter().any(|e| e.weight < 0.0)
    }

    /// Lightest edge, earliest inserted on ties
    pub fn min_weight_edge(&self) -> Option<&EdgeRef> {
        self.edges()
            .min_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.seq.cmp(&b.seq)))
    }

    /// The index map clone handed to results that outlive the query
    pub(crate) fn index_map(&self) -> HashMap<N, NodeIndex> {
        self.index.clone()
    }

    /// Fail with `NegativeWeight` if any edge is negative
    pub(crate) fn require_non_negative(&self) -> Result<()> {
        match self.first_negative_edge() {
            Some(e) => Err(LodestarError::negative_weight(
                &self.nodes[e.from],
                &self.nodes[e.to],
                e.weight,
            )),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingEdge {
    from: NodeIndex,
    to: NodeIndex,
    weight: f64,
    mirror: bool,
}

/// Incremental graph construction. The built `Graph` is immutable.
#[derive(Debug, Clone)]
pub struct GraphBuilder<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeIndex>,
    edges: Vec<PendingEdge>,
    directed: bool,
}

impl<N: NodeId> GraphBuilder<N> {
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            directed,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Each `add_edge` on an undirected builder stores both directions
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Register a node (idempotent) and return its index
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        idx
    }

    /// Add a weighted edge, registering missing endpoints.
    /// Weights must be finite.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<&mut Self> {
        if !weight.is_finite() {
            return Err(LodestarError::invalid_weight(&from, &to, weight));
        }

        let u = self.add_node(from);
        let v = self.add_node(to);
        self.edges.push(PendingEdge {
            from: u,
            to: v,
            weight,
            mirror: false,
        });
        if !self.directed {
            self.edges.push(PendingEdge {
                from: v,
                to: u,
                weight,
                mirror: true,
            });
        }
        Ok(self)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze into CSR form. Edges keep insertion order within each node.
    pub fn build(self) -> Graph<N> {
        let n = self.nodes.len();

        let mut offsets = vec![0usize; n + 1];
        for e in &self.edges {
            offsets[e.from + 1] += 1;
        }
        for u in 0..n {
            offsets[u + 1] += offsets[u];
        }

        let mut cursor = offsets.clone();
        let mut slots = vec![
            EdgeRef {
                from: 0,
                to: 0,
                weight: 0.0,
                seq: 0,
                mirror: false,
            };
            self.edges.len()
        ];
        let mut order = vec![0usize; self.edges.len()];

        for (seq, e) in self.edges.iter().enumerate() {
            let slot = cursor[e.from];
            cursor[e.from] += 1;
            slots[slot] = EdgeRef {
                from: e.from,
                to: e.to,
                weight: e.weight,
                seq,
                mirror: e.mirror,
            };
            order[seq] = slot;
        }

        tracing::debug!(
            nodes = n,
            edges = slots.len(),
            directed = self.directed,
            "graph_built"
        );

        Graph {
            nodes: self.nodes,
            index: self.index,
            offsets,
            slots,
            order,
            directed: self.directed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str> {
        Graph::from_edges(
            true,
            [("A", "B", 1.0), ("A", "C", 4.0), ("B", "C", 2.0), ("C", "A", 3.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let graph = sample();
        assert_eq!(graph.nodes(), &["A", "B", "C"]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_neighbors() {
        let graph = sample();
        let out: Vec<_> = graph.neighbors(&"A").unwrap().collect();
        assert_eq!(out, vec![(&"B", 1.0), (&"C", 4.0)]);

        let out: Vec<_> = graph.neighbors(&"C").unwrap().collect();
        assert_eq!(out, vec![(&"A", 3.0)]);
    }

    #[test]
    fn test_neighbors_unknown_node() {
        let graph = sample();
        let err = graph.neighbors(&"Z").err().unwrap();
        assert!(matches!(err, LodestarError::UnknownNode { ref node } if node == "Z"));
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let graph = sample();
        let seqs: Vec<_> = graph.edges().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
        let first = graph.edges().next().unwrap();
        assert_eq!((first.from, first.to, first.weight), (0, 1, 1.0));
    }

    #[test]
    fn test_undirected_stores_both_directions() {
        let graph = Graph::from_edges(false, [("A", "B", 2.0)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&"B").unwrap().count(), 1);
        let mirrors: Vec<_> = graph.edges().map(|e| e.mirror).collect();
        assert_eq!(mirrors, vec![false, true]);
    }

    #[test]
    fn test_isolated_node() {
        let mut builder = GraphBuilder::directed();
        builder.add_node("solo");
        builder.add_edge("A", "B", 1.0).unwrap();
        let graph = builder.build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.out_degree(graph.index_of(&"solo").unwrap()), 0);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let mut builder = GraphBuilder::directed();
        let err = builder.add_edge("A", "B", f64::NAN).err().unwrap();
        assert!(matches!(err, LodestarError::InvalidWeight { .. }));

        let err = builder.add_edge("A", "B", f64::INFINITY).err().unwrap();
        assert_eq!(err.to_string(), "non-finite edge weight inf on A -> B");
        assert_eq!(builder.node_count(), 0);
    }

    #[test]
    fn test_negative_weight_detection() {
        let graph = Graph::from_edges(true, [("A", "B", 1.0), ("B", "C", -2.0)]).unwrap();
        assert!(graph.has_negative_weight());
        let err = graph.require_non_negative().unwrap_err();
        assert_eq!(err.to_string(), "negative edge weight -2 on B -> C");
        assert!(!sample().has_negative_weight());
    }

    #[test]
    fn test_min_weight_edge_prefers_earliest() {
        let graph =
            Graph::from_edges(true, [("A", "B", 3.0), ("B", "C", 1.0), ("C", "A", 1.0)]).unwrap();
        let edge = graph.min_weight_edge().unwrap();
        assert_eq!((graph.node(edge.from), graph.node(edge.to)), (&"B", &"C"));

        let empty: Graph<&str> = GraphBuilder::directed().build();
        assert!(empty.min_weight_edge().is_none());
    }

    #[test]
    fn test_graph_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Graph<String>>();
    }
}
