//! Graphkit Core Library
//!
//! A mutable graph store plus traversal, shortest-path, and ordering
//! algorithms, with diagram export and a product-similarity layer built on
//! the public graph API.

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod logging;
pub mod product;
pub mod queue;
