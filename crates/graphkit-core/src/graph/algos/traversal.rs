//! Breadth-first, depth-first, and random-walk traversals

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use crate::{bail_invalid, bail_node_not_found};

const WALK_RESERVE: usize = 1024;

/// Breadth-first traversal from `start`.
///
/// A node is marked visited when it is dequeued, so a node may sit in the
/// queue more than once but is emitted exactly once, in layer order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs(graph: &dyn Graph, start: NodeId) -> Result<Vec<NodeId>> {
    if !graph.has_node(start) {
        bail_node_not_found!(start);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        for edge in graph.edges(node)? {
            if !visited.contains(&edge.to) {
                queue.push_back(edge.to);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

/// Depth-first pre-order traversal from `start`.
///
/// Uses an explicit stack; neighbors are pushed in reverse so they are
/// entered in adjacency order, giving the same sequence as the recursive
/// formulation without its depth limit.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs(graph: &dyn Graph, start: NodeId) -> Result<Vec<NodeId>> {
    if !graph.has_node(start) {
        bail_node_not_found!(start);
    }

    let mut visited = HashSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        for edge in graph.edges(node)?.iter().rev() {
            if !visited.contains(&edge.to) {
                stack.push(edge.to);
            }
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");
    Ok(order)
}

/// Random walk of `steps` positions (start included).
///
/// Each step follows one outgoing edge chosen uniformly from `rng`; pass a
/// seeded generator for reproducible walks.
#[tracing::instrument(skip(graph, rng))]
pub fn random_walk<R>(
    graph: &dyn Graph,
    start: NodeId,
    steps: usize,
    rng: &mut R,
) -> Result<Vec<NodeId>>
where
    R: Rng + ?Sized,
{
    if !graph.has_node(start) {
        bail_node_not_found!(start);
    }
    if steps == 0 {
        bail_invalid!("walk steps", steps);
    }

    // `steps` is caller-controlled; grow on demand past a small reservation
    let mut walk = Vec::with_capacity(steps.min(WALK_RESERVE));
    walk.push(start);
    let mut current = start;

    while walk.len() < steps {
        let Some(edge) = graph.edges(current)?.choose(rng) else {
            return Err(GraphError::DeadEnd {
                node: current,
                produced: walk.len(),
                steps,
            });
        };
        current = edge.to;
        walk.push(current);
    }

    Ok(walk)
}
