//! Topological ordering and cycle detection

use std::collections::{HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

/// Kahn's algorithm.
///
/// Zero in-degree nodes are seeded in `nodes()` order and processed FIFO, so
/// the result is deterministic for a given graph.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn topological_sort(graph: &dyn Graph) -> Result<Vec<NodeId>> {
    let nodes = graph.nodes();

    let mut in_degree: HashMap<NodeId, usize> = nodes.iter().map(|&node| (node, 0)).collect();
    for &node in &nodes {
        for edge in graph.edges(node)? {
            *in_degree.entry(edge.to).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = nodes
        .iter()
        .copied()
        .filter(|node| in_degree.get(node) == Some(&0))
        .collect();
    let mut order = Vec::with_capacity(nodes.len());

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for edge in graph.edges(node)? {
            if let Some(degree) = in_degree.get_mut(&edge.to) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(edge.to);
                }
            }
        }
    }

    if order.len() < nodes.len() {
        tracing::debug!(sorted = order.len(), total = nodes.len(), "cycle detected");
        return Err(GraphError::CycleDetected {
            sorted: order.len(),
            total: nodes.len(),
        });
    }

    Ok(order)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current depth-first path
    OnStack,
    /// Fully explored
    Done,
}

/// Whether any directed cycle exists.
///
/// Depth-first search over every node with visited and recursion-stack
/// marks; an edge into a node still on the stack is a back edge. In an
/// undirected graph every edge is its own back edge, so any edge counts.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn detect_cycle(graph: &dyn Graph) -> bool {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();

    for root in graph.nodes() {
        if marks.contains_key(&root) {
            continue;
        }

        // (node, index of the next edge to examine)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::OnStack);

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let edges = graph.edges(node).unwrap_or(&[]);

            match edges.get(next) {
                Some(edge) => {
                    frame.1 += 1;
                    match marks.get(&edge.to) {
                        Some(Mark::OnStack) => {
                            tracing::debug!(from = node, to = edge.to, "back edge");
                            return true;
                        }
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(edge.to, Mark::OnStack);
                            stack.push((edge.to, 0));
                        }
                    }
                }
                None => {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Whether the graph is a directed acyclic graph
pub fn is_dag(graph: &dyn Graph) -> bool {
    !detect_cycle(graph)
}
