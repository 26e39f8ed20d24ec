//! Graph files
//!
//! A graph file lists edges (and optionally extra nodes and A* estimates) in
//! JSON, TOML, or YAML, picked by file extension:
//!
//! ```json
//! { "directed": true,
//!   "nodes": ["A", "B"],
//!   "edges": [ { "from": "A", "to": "B", "weight": 1.5 } ],
//!   "heuristic": { "A": 2.0 } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::{Graph, GraphBuilder};
use crate::error::{LodestarError, Result};

fn default_weight() -> f64 {
    1.0
}

/// One edge entry; `weight` defaults to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// On-disk graph description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    /// Extra nodes; edge endpoints are registered automatically
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<HashMap<String, f64>>,
}

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            other => Err(LodestarError::invalid_graph_file(
                path,
                format!(
                    "unsupported extension {:?} (expected .json, .toml, .yaml or .yml)",
                    other.unwrap_or("")
                ),
            )),
        }
    }
}

/// How to resolve edge direction while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Used when the file does not say
    pub default_directed: bool,
    /// Treat every edge as undirected regardless of the file
    pub force_undirected: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            default_directed: true,
            force_undirected: false,
        }
    }
}

/// A built graph plus the optional A* estimate table from its file
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph<String>,
    pub heuristic: Option<HashMap<String, f64>>,
}

impl GraphFile {
    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        let file = match format {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    /// Build the graph. Heuristic entries must name nodes of the graph.
    pub fn into_graph(self, opts: &LoadOptions) -> Result<LoadedGraph> {
        let directed = !opts.force_undirected && self.directed.unwrap_or(opts.default_directed);

        let mut builder = GraphBuilder::new(directed);
        for node in self.nodes {
            builder.add_node(node);
        }
        for edge in self.edges {
            builder.add_edge(edge.from, edge.to, edge.weight)?;
        }
        let graph = builder.build();

        if let Some(heuristic) = &self.heuristic {
            // Sorted so the reported node does not depend on hash order
            let mut unknown: Vec<&String> =
                heuristic.keys().filter(|n| !graph.contains(n)).collect();
            unknown.sort();
            if let Some(node) = unknown.first() {
                crate::bail_unknown_node!(node);
            }
        }

        Ok(LoadedGraph {
            graph,
            heuristic: self.heuristic,
        })
    }
}

/// Read, parse, and build a graph file
#[tracing::instrument(skip(opts))]
pub fn load_graph(path: &Path, opts: &LoadOptions) -> Result<LoadedGraph> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    let file = GraphFile::parse(&content, format).map_err(|e| match e {
        LodestarError::Json(_) | LodestarError::Toml(_) | LodestarError::Yaml(_) => {
            LodestarError::invalid_graph_file(path, e.to_string())
        }
        other => other,
    })?;

    let loaded = file.into_graph(opts)?;
    tracing::debug!(
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        directed = loaded.graph.is_directed(),
        "graph_loaded"
    );
    Ok(loaded)
}
