//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default node limit for all-pairs queries
pub const DEFAULT_APSP_MAX_NODES: usize = 4096;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Graph interpretation defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Resource limits for expensive queries
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Output rendering options
    #[serde(default)]
    pub output: OutputConfig,
}

/// How graph files are interpreted when they do not say otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Treat edges as directed unless the graph file overrides it
    #[serde(default = "default_directed")]
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: default_directed(),
        }
    }
}

/// Limits applied before running quadratic or cubic queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest graph Floyd-Warshall will accept (O(V^2) memory, O(V^3) time)
    #[serde(default = "default_apsp_max_nodes")]
    pub apsp_max_nodes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            apsp_max_nodes: default_apsp_max_nodes(),
        }
    }
}

/// Human output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for distances and weights
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_directed() -> bool {
    true
}

fn default_apsp_max_nodes() -> usize {
    DEFAULT_APSP_MAX_NODES
}

fn default_precision() -> usize {
    3
}
