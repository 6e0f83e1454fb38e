use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, NodeId, PathResult};
use crate::logging::SearchStats;
use crate::queue::{Handle, PriorityQueue};
use crate::{bail_node_not_found, log_search_stats};

/// Priority queue of nodes that keeps at most one entry per node.
///
/// A node that is already queued has its entry updated in place through its
/// handle instead of being pushed a second time.
struct Frontier {
    queue: PriorityQueue<NodeId>,
    handles: HashMap<NodeId, Handle>,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            queue: PriorityQueue::new(),
            handles: HashMap::new(),
        }
    }

    fn push_or_update(
        &mut self,
        node: NodeId,
        priority: f64,
        stats: &mut SearchStats,
    ) -> Result<()> {
        match self.handles.get(&node) {
            Some(&handle) => {
                self.queue.update_priority(handle, node, priority)?;
                stats.decreased += 1;
            }
            None => {
                let handle = self.queue.push(node, priority);
                self.handles.insert(node, handle);
            }
        }
        stats.observe_queue(self.queue.len());
        Ok(())
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (node, _) = self.queue.pop_min().ok()?;
        self.handles.remove(&node);
        Some(node)
    }
}

/// Distances and predecessors from a single-source search.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: NodeId,
    distances: BTreeMap<NodeId, f64>,
    predecessors: BTreeMap<NodeId, NodeId>,
    stats: SearchStats,
}

impl ShortestPaths {
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Distance from the start; +∞ when unreachable, `None` for unknown nodes
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(f64::is_finite)
    }

    pub fn distances(&self) -> &BTreeMap<NodeId, f64> {
        &self.distances
    }

    pub fn predecessors(&self) -> &BTreeMap<NodeId, NodeId> {
        &self.predecessors
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Walk predecessor links back from `goal` to the start.
    pub fn path_to(&self, goal: NodeId) -> Result<PathResult> {
        let Some(cost) = self.distance(goal) else {
            bail_node_not_found!(goal);
        };
        if !cost.is_finite() {
            return Err(GraphError::PathNotFound {
                from: self.start,
                to: goal,
            });
        }

        let path = reconstruct_path(self.start, goal, self.distances.len(), |node| {
            self.predecessor(node)
        })?;
        Ok(PathResult { path, cost })
    }
}

/// Follow `predecessor` from `goal` until `start`; fails if the chain breaks.
///
/// `limit` bounds the walk so a malformed predecessor map cannot loop.
fn reconstruct_path(
    start: NodeId,
    goal: NodeId,
    limit: usize,
    predecessor: impl Fn(NodeId) -> Option<NodeId>,
) -> Result<Vec<NodeId>> {
    let not_found = || GraphError::PathNotFound {
        from: start,
        to: goal,
    };

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        if path.len() > limit {
            return Err(not_found());
        }
        current = predecessor(current).ok_or_else(not_found)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}

/// Weights outside [0, ∞) break the relaxation invariant.
fn check_weight(from: NodeId, edge: &Edge) -> Result<()> {
    if edge.weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::invalid_weight(
            from,
            edge.to,
            edge.weight,
            "shortest-path search requires non-negative weights",
        ))
    }
}

/// Dijkstra's single-source shortest paths.
///
/// Every node of the graph gets a distance (+∞ when unreachable). The graph
/// must be weighted and every edge reached during the search must carry a
/// non-negative weight.
#[tracing::instrument(
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count())
)]
pub fn dijkstra(graph: &dyn Graph, start: NodeId) -> Result<ShortestPaths> {
    if !graph.has_node(start) {
        bail_node_not_found!(start);
    }
    if !graph.is_weighted() {
        return Err(GraphError::unweighted("dijkstra"));
    }

    let mut distances: BTreeMap<NodeId, f64> = graph
        .nodes()
        .into_iter()
        .map(|node| (node, f64::INFINITY))
        .collect();
    distances.insert(start, 0.0);
    let mut predecessors = BTreeMap::new();
    let mut finalized = HashSet::new();
    let mut stats = SearchStats::default();

    let mut frontier = Frontier::new();
    frontier.push_or_update(start, 0.0, &mut stats)?;

    while let Some(current) = frontier.pop() {
        if !finalized.insert(current) {
            continue;
        }
        stats.expanded += 1;
        let current_distance = distances.get(&current).copied().unwrap_or(f64::INFINITY);

        for edge in graph.edges(current)? {
            check_weight(current, edge)?;
            if finalized.contains(&edge.to) {
                continue;
            }

            let candidate = current_distance + edge.weight;
            let known = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                tracing::trace!(from = current, to = edge.to, distance = candidate, "relax");
                distances.insert(edge.to, candidate);
                predecessors.insert(edge.to, current);
                stats.relaxed += 1;
                frontier.push_or_update(edge.to, candidate, &mut stats)?;
            }
        }
    }

    log_search_stats!(&stats, "dijkstra");
    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
        stats,
    })
}

/// Shortest path between two nodes using [`dijkstra`].
pub fn shortest_path(graph: &dyn Graph, start: NodeId, goal: NodeId) -> Result<PathResult> {
    if !graph.has_node(goal) {
        bail_node_not_found!(goal);
    }
    dijkstra(graph, start)?.path_to(goal)
}

/// A* search from `start` to `goal`.
///
/// Queue priority is `distance + heuristic(node, goal)`. The search stops
/// once `goal` is popped. Nodes may be reopened when a shorter route is
/// found, so an admissible heuristic yields a shortest path even if it is
/// not consistent. Admissibility itself is not checked.
#[tracing::instrument(skip(graph, heuristic), fields(nodes = graph.node_count()))]
pub fn a_star<H>(
    graph: &dyn Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: H,
) -> Result<PathResult>
where
    H: Fn(NodeId, NodeId) -> f64,
{
    for node in [start, goal] {
        if !graph.has_node(node) {
            bail_node_not_found!(node);
        }
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::from([(start, 0.0)]);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
    let mut stats = SearchStats::default();

    let mut frontier = Frontier::new();
    frontier.push_or_update(start, heuristic(start, goal), &mut stats)?;

    while let Some(current) = frontier.pop() {
        if current == goal {
            break;
        }
        stats.expanded += 1;
        let current_distance = distances.get(&current).copied().unwrap_or(f64::INFINITY);

        for edge in graph.edges(current)? {
            check_weight(current, edge)?;

            let candidate = current_distance + edge.weight;
            let known = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(edge.to, candidate);
                predecessors.insert(edge.to, current);
                stats.relaxed += 1;
                let priority = candidate + heuristic(edge.to, goal);
                frontier.push_or_update(edge.to, priority, &mut stats)?;
            }
        }
    }

    log_search_stats!(&stats, "a_star");

    let path = reconstruct_path(start, goal, graph.node_count(), |node| {
        predecessors.get(&node).copied()
    })?;
    let cost = distances.get(&goal).copied().unwrap_or(f64::INFINITY);
    Ok(PathResult { path, cost })
}
