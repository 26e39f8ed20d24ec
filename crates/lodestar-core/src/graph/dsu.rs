//! Disjoint-set union with union by rank and path compression

use super::model::NodeIndex;

/// Partition of `0..n` into disjoint sets
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<NodeIndex>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    /// One singleton set per element
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Representative of `x`'s set. Compresses the walked path.
    pub fn find(&mut self, x: NodeIndex) -> NodeIndex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets of `x` and `y`. Returns false if they were already joined.
    pub fn union(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets remaining
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
