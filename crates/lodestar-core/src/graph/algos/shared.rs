use crate::graph::model::{Graph, NodeId, NodeIndex};
use crate::graph::types::{ShortestPaths, UNREACHABLE};

/// Distance and predecessor arrays for a single-source query
pub(crate) struct Tentative {
    pub dist: Vec<f64>,
    pub pred: Vec<Option<NodeIndex>>,
}

impl Tentative {
    /// All nodes at +inf except `source` at 0
    pub fn new(node_count: usize, source: NodeIndex) -> Self {
        let mut dist = vec![UNREACHABLE; node_count];
        dist[source] = 0.0;
        Self {
            dist,
            pred: vec![None; node_count],
        }
    }

    /// Relax `u -> v` with weight `w`; true if `v` improved
    #[inline]
    pub fn relax(&mut self, u: NodeIndex, v: NodeIndex, w: f64) -> bool {
        let du = self.dist[u];
        if !du.is_finite() {
            return false;
        }
        let candidate = du + w;
        if candidate < self.dist[v] {
            self.dist[v] = candidate;
            self.pred[v] = Some(u);
            true
        } else {
            false
        }
    }

    pub fn into_result<N: NodeId>(self, graph: &Graph<N>, source: NodeIndex) -> ShortestPaths<N> {
        ShortestPaths::new(
            source,
            graph.nodes().to_vec(),
            graph.index_map(),
            self.dist,
            self.pred,
        )
    }
}
