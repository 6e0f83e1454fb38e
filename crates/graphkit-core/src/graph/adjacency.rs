use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::provider::Graph;
use crate::graph::types::{Edge, NodeId};

/// Graph stored as one ordered edge list per node.
///
/// Nodes are kept in a `BTreeMap`, so `nodes()` enumerates them in ascending
/// id order and every algorithm built on it is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList {
    directed: bool,
    weighted: bool,
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl AdjacencyList {
    /// Create an empty graph; both modes are fixed for the graph's lifetime
    pub fn new(directed: bool, weighted: bool) -> Self {
        AdjacencyList {
            directed,
            weighted,
            adjacency: BTreeMap::new(),
        }
    }

    fn edges_mut(&mut self, node: NodeId) -> Result<&mut Vec<Edge>> {
        self.adjacency
            .get_mut(&node)
            .ok_or(GraphError::NodeNotFound { id: node })
    }

    /// Number of stored adjacency entries (two per undirected edge)
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl Graph for AdjacencyList {
    fn add_node(&mut self, id: NodeId) -> Result<()> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::DuplicateNode { id });
        }
        self.adjacency.insert(id, Vec::new());
        tracing::trace!(node = id, "add_node");
        Ok(())
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        if !self.weighted && weight != 0.0 {
            return Err(GraphError::WeightNotAllowed { from, to, weight });
        }
        if !self.adjacency.contains_key(&to) {
            return Err(GraphError::NodeNotFound { id: to });
        }

        self.edges_mut(from)?.push(Edge::new(to, weight));
        if !self.directed {
            self.edges_mut(to)?.push(Edge::new(from, weight));
        }

        tracing::trace!(from, to, weight, "add_edge");
        Ok(())
    }

    fn remove_node(&mut self, id: NodeId) -> Result<()> {
        if self.adjacency.remove(&id).is_none() {
            return Err(GraphError::NodeNotFound { id });
        }

        let mut dropped = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.to != id);
            dropped += before - edges.len();
        }

        tracing::debug!(node = id, dropped_entries = dropped, "remove_node");
        Ok(())
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|edges| edges.iter().any(|edge| edge.to == to))
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        let entries = self.entry_count();
        if self.directed {
            entries
        } else {
            entries / 2
        }
    }

    fn edges(&self, node: NodeId) -> Result<&[Edge]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(GraphError::NodeNotFound { id: node })
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }
}

#[cfg(test)]
mod tests;
