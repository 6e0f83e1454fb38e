//! Graph description files
//!
//! A description lists the graph's modes, its nodes, its edges and,
//! optionally, product labels:
//!
//! ```yaml
//! directed: true
//! weighted: true
//! nodes: [1, 2, 3]
//! edges:
//!   - { from: 1, to: 2, weight: 0.8 }
//! products:
//!   - { id: 1, labels: [electronics, phone] }
//! ```
//!
//! Building a graph replays the description through the store's
//! `add_node`/`add_edge` contract, so duplicate nodes, dangling edges and
//! weights on an unweighted graph are reported with the store's own errors.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use graphkit_core::bail_usage;
use graphkit_core::error::Result;
use graphkit_core::graph::{AdjacencyList, Graph, NodeId};
use graphkit_core::product::{Product, ProductGraph};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub products: Vec<Product>,
}

fn default_directed() -> bool {
    true
}

impl GraphDocument {
    /// Read a description, choosing YAML or JSON by file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document: GraphDocument = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        tracing::debug!(path = %path.display(), "loaded graph description");
        Ok(document)
    }

    /// Node ids in declaration order: `nodes` first, then product ids not listed there
    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = self.nodes.clone();
        let mut seen: HashSet<NodeId> = self.nodes.iter().copied().collect();
        for product in &self.products {
            if seen.insert(product.id) {
                ids.push(product.id);
            }
        }
        ids
    }

    pub fn build_graph(&self) -> Result<AdjacencyList> {
        let mut graph = AdjacencyList::new(self.directed, self.weighted);
        for id in self.node_ids() {
            graph.add_node(id)?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Build a product graph; nodes without a product entry get an unlabeled product
    pub fn build_products(&self) -> Result<ProductGraph> {
        if self.products.is_empty() {
            bail_usage!("graph description has no products section");
        }

        let mut products = ProductGraph::new(self.directed, self.weighted);
        for id in self.node_ids() {
            let product = self
                .products
                .iter()
                .find(|product| product.id == id)
                .cloned()
                .unwrap_or(Product { id, labels: Vec::new() });
            products.add_product(product)?;
        }
        for edge in &self.edges {
            products.add_similarity(edge.from, edge.to, edge.weight)?;
        }
        Ok(products)
    }
}
