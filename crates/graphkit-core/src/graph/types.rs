use serde::{Deserialize, Serialize};

/// Integer identifier of a node
pub type NodeId = i64;

/// An outgoing edge, owned by the adjacency list of its source node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Target node
    pub to: NodeId,
    /// Edge weight (always 0.0 in an unweighted graph)
    pub weight: f64,
}

impl Edge {
    pub fn new(to: NodeId, weight: f64) -> Self {
        Edge { to, weight }
    }
}

/// A path between two nodes and its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Nodes from start to goal, both inclusive
    pub path: Vec<NodeId>,
    /// Sum of edge weights along the path
    pub cost: f64,
}

impl PathResult {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
