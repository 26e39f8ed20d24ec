//! Lodestar Core Library
//!
//! Weighted graph model and the classic graph algorithms over it: shortest
//! paths (Dijkstra, Bellman-Ford, A*, Floyd-Warshall), minimum spanning trees
//! (Kruskal, Prim), topological sorting (Kahn), and strongly connected
//! components (Tarjan).
//!
//! ```
//! use lodestar_core::graph::{dijkstra, Graph};
//!
//! let graph = Graph::from_edges(false, [("A", "B", 1.0), ("B", "C", 2.0)])?;
//! let paths = dijkstra(&graph, &"A")?;
//! assert_eq!(paths.distance(&"C")?, 3.0);
//! # Ok::<(), lodestar_core::error::LodestarError>(())
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
