//! Error types and exit codes for lodestar
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph data error (unknown node, negative weight or cycle, bad graph file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the lodestar driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error - the input graph violates a query precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running queries
#[derive(Error, Debug)]
pub enum LodestarError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph data errors (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("{algorithm}: negative cycle detected through {node}")]
    NegativeCycle {
        algorithm: &'static str,
        node: String,
    },

    #[error("cycle detected: {unordered} node(s) could not be ordered")]
    CycleDetected { unordered: usize },

    #[error("non-finite edge weight {weight} on {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid heuristic estimate {value} for {node} (must be finite and >= 0)")]
    InvalidHeuristic { node: String, value: f64 },

    #[error("{algorithm}: graph has {nodes} nodes, limit is {limit}")]
    GraphTooLarge {
        algorithm: &'static str,
        nodes: usize,
        limit: usize,
    },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl LodestarError {
    /// Create an error for a node missing from the graph
    pub fn unknown_node(node: &impl std::fmt::Debug) -> Self {
        LodestarError::UnknownNode {
            node: display_node(node),
        }
    }

    /// Create an error for a negative edge seen by an algorithm that forbids one
    pub fn negative_weight(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        LodestarError::NegativeWeight {
            from: display_node(from),
            to: display_node(to),
            weight,
        }
    }

    /// Create an error for a NaN or infinite edge weight
    pub fn invalid_weight(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        weight: f64,
    ) -> Self {
        LodestarError::InvalidWeight {
            from: display_node(from),
            to: display_node(to),
            weight,
        }
    }

    /// Create an error for a heuristic estimate that is negative or not finite
    pub fn invalid_heuristic(node: &impl std::fmt::Debug, value: f64) -> Self {
        LodestarError::InvalidHeuristic {
            node: display_node(node),
            value,
        }
    }

    /// Create an error for a negative cycle found by `algorithm`
    pub fn negative_cycle(algorithm: &'static str, node: &impl std::fmt::Debug) -> Self {
        LodestarError::NegativeCycle {
            algorithm,
            node: display_node(node),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LodestarError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph file
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        LodestarError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            LodestarError::UnknownFormat(_)
            | LodestarError::UsageError(_)
            | LodestarError::InvalidValue { .. } => ExitCode::Usage,

            // Graph data errors
            LodestarError::UnknownNode { .. }
            | LodestarError::NegativeWeight { .. }
            | LodestarError::NegativeCycle { .. }
            | LodestarError::CycleDetected { .. }
            | LodestarError::InvalidWeight { .. }
            | LodestarError::InvalidHeuristic { .. }
            | LodestarError::GraphTooLarge { .. }
            | LodestarError::InvalidGraphFile { .. } => ExitCode::Data,

            // Generic failures
            LodestarError::Io(_)
            | LodestarError::Yaml(_)
            | LodestarError::Json(_)
            | LodestarError::Toml(_)
            | LodestarError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LodestarError::UnknownFormat(_) => "unknown_format",
            LodestarError::UsageError(_) => "usage_error",
            LodestarError::InvalidValue { .. } => "invalid_value",
            LodestarError::UnknownNode { .. } => "unknown_node",
            LodestarError::NegativeWeight { .. } => "negative_weight",
            LodestarError::NegativeCycle { .. } => "negative_cycle",
            LodestarError::CycleDetected { .. } => "cycle_detected",
            LodestarError::InvalidWeight { .. } => "invalid_weight",
            LodestarError::InvalidHeuristic { .. } => "invalid_heuristic",
            LodestarError::GraphTooLarge { .. } => "graph_too_large",
            LodestarError::InvalidGraphFile { .. } => "invalid_graph_file",
            LodestarError::Io(_) => "io_error",
            LodestarError::Yaml(_) => "yaml_error",
            LodestarError::Json(_) => "json_error",
            LodestarError::Toml(_) => "toml_error",
            LodestarError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Render a node identifier for error messages.
/// String-like identifiers lose their Debug quotes.
fn display_node(node: &impl std::fmt::Debug) -> String {
    let rendered = format!("{:?}", node);
    rendered
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or(rendered)
}

/// Result type alias for lodestar operations
pub type Result<T> = std::result::Result<T, LodestarError>;
