use crate::error::Result;
use crate::graph::types::{Edge, NodeId};

/// Capability set shared by every graph representation.
///
/// Algorithms take `&dyn Graph` and only use the query half of this trait,
/// so an alternate backing (e.g. compressed sparse rows) can be swapped in
/// without touching them.
pub trait Graph {
    /// Register a node with an empty adjacency list
    fn add_node(&mut self, id: NodeId) -> Result<()>;

    /// Add an edge; undirected graphs also store the reverse entry
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()>;

    /// Remove a node together with every edge that points at it
    fn remove_node(&mut self, id: NodeId) -> Result<()>;

    fn has_node(&self, id: NodeId) -> bool;

    /// Whether `from` has an adjacency entry targeting `to`
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool;

    fn node_count(&self) -> usize;

    /// Logical edge count (reverse entries of undirected edges count once)
    fn edge_count(&self) -> usize;

    /// Outgoing edges of `node` in insertion order
    fn edges(&self, node: NodeId) -> Result<&[Edge]>;

    /// Targets of the outgoing edges of `node` in insertion order
    fn neighbors(&self, node: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.edges(node)?.iter().map(|edge| edge.to).collect())
    }

    /// All node identifiers in the representation's enumeration order
    fn nodes(&self) -> Vec<NodeId>;

    fn is_directed(&self) -> bool;

    fn is_weighted(&self) -> bool;
}
