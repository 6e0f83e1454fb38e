//! Error types and exit codes for graphkit
//!
//! Every fallible operation in the engine reports one of these kinds; none of
//! them retries internally, and bad input never panics.
//!
//! Exit codes used by the CLI:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid parameter values)
//! - 3: Graph data error (missing node, wrong weight mode, cycle, ...)

mod macros;

use crate::graph::NodeId;
use thiserror::Error;

/// Exit codes reported by the graphkit CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph store contract
    #[error("node {id} already exists")]
    DuplicateNode { id: NodeId },

    #[error("node {id} does not exist in the graph")]
    NodeNotFound { id: NodeId },

    #[error("weight {weight} not allowed on edge {from} -> {to} in an unweighted graph")]
    WeightNotAllowed { from: NodeId, to: NodeId, weight: f64 },

    // Algorithm preconditions
    #[error("{operation} requires a weighted graph")]
    UnweightedGraph { operation: String },

    #[error("invalid weight {weight} on edge {from} -> {to}: {reason}")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
        reason: String,
    },

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("priority queue handle no longer refers to a queued item")]
    InvalidHandle,

    #[error("random walk reached dead end at node {node} after {produced} of {steps} steps")]
    DeadEnd {
        node: NodeId,
        produced: usize,
        steps: usize,
    },

    #[error("graph contains a cycle: only {sorted} of {total} nodes could be ordered")]
    CycleDetected { sorted: usize, total: usize },

    #[error("no path from node {from} to node {to}")]
    PathNotFound { from: NodeId, to: NodeId },

    // Usage errors
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node that is not in the graph
    pub fn node_not_found(id: NodeId) -> Self {
        GraphError::NodeNotFound { id }
    }

    /// Create an error for an algorithm that needs edge weights
    pub fn unweighted(operation: &str) -> Self {
        GraphError::UnweightedGraph {
            operation: operation.to_string(),
        }
    }

    /// Create an error for a weight outside an algorithm's contract
    pub fn invalid_weight(from: NodeId, to: NodeId, weight: f64, reason: &str) -> Self {
        GraphError::InvalidWeight {
            from,
            to,
            weight,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid parameter value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidValue { .. } | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::DuplicateNode { .. }
            | GraphError::NodeNotFound { .. }
            | GraphError::WeightNotAllowed { .. }
            | GraphError::UnweightedGraph { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::DeadEnd { .. }
            | GraphError::CycleDetected { .. }
            | GraphError::PathNotFound { .. } => ExitCode::Data,

            GraphError::EmptyQueue
            | GraphError::InvalidHandle
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Yaml(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateNode { .. } => "duplicate_node",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::WeightNotAllowed { .. } => "weight_not_allowed",
            GraphError::UnweightedGraph { .. } => "unweighted_graph",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::InvalidHandle => "invalid_handle",
            GraphError::DeadEnd { .. } => "dead_end",
            GraphError::CycleDetected { .. } => "cycle_detected",
            GraphError::PathNotFound { .. } => "path_not_found",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
