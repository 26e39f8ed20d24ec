//! Graph algorithm implementations
//!
//! Every algorithm is a pure function over `&Graph<N>` with private working
//! state:
//! - `dijkstra`: Single-source shortest paths, non-negative weights
//! - `bellman_ford`: Single-source shortest paths with negative-cycle detection
//! - `astar`: Goal-directed shortest path with a heuristic
//! - `floyd_warshall`: All-pairs shortest paths
//! - `mst`: Kruskal and Prim minimum spanning trees
//! - `topo`: Kahn topological sort
//! - `scc`: Tarjan strongly connected components
//! - `shared`: Distance bookkeeping shared by the single-source algorithms

pub mod astar;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod mst;
pub mod scc;
mod shared;
pub mod topo;

pub use astar::{astar, astar_with_estimates};
pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, AllPairsOptions};
pub use mst::{kruskal, prim};
pub use scc::tarjan_scc;
pub use topo::topological_sort;
