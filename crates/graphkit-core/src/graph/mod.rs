//! Graph storage and algorithms
//!
//! Provides the graph abstraction and the algorithms built on it:
//! - `Graph` trait: the capability set every representation implements
//! - `AdjacencyList`: ordered per-node edge lists
//! - `algos`: traversal, shortest-path, ordering, and clique search

pub mod adjacency;
pub mod algos;
pub mod provider;
pub mod types;

pub use adjacency::AdjacencyList;
pub use algos::{
    a_star, bfs, detect_cycle, dfs, dijkstra, find_cliques, is_dag, random_walk, shortest_path,
    topological_sort, ShortestPaths,
};
pub use provider::Graph;
pub use types::{Edge, NodeId, PathResult};
