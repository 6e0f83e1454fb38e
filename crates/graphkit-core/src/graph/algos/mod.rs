//! Graph algorithm implementations
//!
//! Every algorithm takes `&dyn Graph` and only reads from it:
//! - `traversal`: BFS, DFS, and random walks
//! - `shortest_path`: Dijkstra and A* on the indexed priority queue
//! - `ordering`: topological sort and cycle detection
//! - `clique`: fixed-size clique search

pub mod clique;
pub mod ordering;
pub mod shortest_path;
pub mod traversal;

pub use clique::find_cliques;
pub use ordering::{detect_cycle, is_dag, topological_sort};
pub use shortest_path::{a_star, dijkstra, shortest_path, ShortestPaths};
pub use traversal::{bfs, dfs, random_walk};
