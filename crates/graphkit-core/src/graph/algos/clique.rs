//! Fixed-size clique search

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Two distinct nodes are adjacent when edges run both ways.
///
/// Undirected graphs store both directions for every edge, so this reduces
/// to a single lookup there.
fn adjacent(graph: &dyn Graph, a: NodeId, b: NodeId) -> bool {
    a != b && graph.has_edge(a, b) && graph.has_edge(b, a)
}

/// All cliques with exactly `size` members.
///
/// Members are listed in ascending id order and the cliques themselves come
/// out in lexicographic order.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn find_cliques(graph: &dyn Graph, size: usize) -> Result<Vec<Vec<NodeId>>> {
    if size == 0 {
        bail_invalid!("clique size", size);
    }

    let mut nodes = graph.nodes();
    nodes.sort_unstable();

    let mut cliques = Vec::new();
    let mut current = Vec::with_capacity(size);
    extend(graph, &nodes, size, &mut current, &mut cliques);

    tracing::debug!(found = cliques.len(), "clique search complete");
    Ok(cliques)
}

fn extend(
    graph: &dyn Graph,
    candidates: &[NodeId],
    size: usize,
    current: &mut Vec<NodeId>,
    cliques: &mut Vec<Vec<NodeId>>,
) {
    if current.len() == size {
        cliques.push(current.clone());
        return;
    }

    let needed = size - current.len();
    for (i, &node) in candidates.iter().enumerate() {
        if candidates.len() - i < needed {
            break;
        }
        if current.iter().all(|&member| adjacent(graph, member, node)) {
            current.push(node);
            extend(graph, &candidates[i + 1..], size, current, cliques);
            current.pop();
        }
    }
}
