//! Weighted graphs and the algorithms that query them
//!
//! - `model`: Immutable graph with dense indices and CSR adjacency
//! - `queue`: Lazy-deletion min-priority queue
//! - `dsu`: Disjoint-set union for Kruskal
//! - `path`: Predecessor and next-hop path reconstruction
//! - `types`: Query result types
//! - `file`: Graph file loading (JSON, TOML, YAML)
//! - `algos`: The algorithms themselves

pub mod algos;
pub mod dsu;
pub mod file;
pub mod model;
pub mod path;
pub mod queue;
pub mod types;

pub use algos::{
    astar, astar_with_estimates, bellman_ford, dijkstra, floyd_warshall, kruskal, prim,
    tarjan_scc, topological_sort, AllPairsOptions,
};
pub use file::{load_graph, EdgeSpec, FileFormat, GraphFile, LoadOptions, LoadedGraph};
pub use model::{EdgeRef, Graph, GraphBuilder, NodeId, NodeIndex};
pub use types::{
    AllPairs, Components, Condensation, PathResult, ShortestPaths, SpanningEdge, SpanningForest,
    UNREACHABLE,
};
