//! Product similarity layer
//!
//! Maps graph node ids to products and treats weighted edges as similarity
//! scores. Every mutation goes through the [`Graph`] contract, so the store's
//! duplicate/missing-node and weight-mode rules apply unchanged.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{AdjacencyList, Graph, NodeId};

/// A product attached to a graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Node id of the product
    pub id: NodeId,
    /// Descriptive labels (e.g. "electronics", "phone")
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Product {
    pub fn new(id: NodeId, labels: &[&str]) -> Self {
        Product {
            id,
            labels: labels.iter().map(|label| label.to_string()).collect(),
        }
    }
}

/// A recommended product and the similarity score that ranked it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub score: f64,
}

/// Graph of products connected by similarity edges
#[derive(Debug, Clone)]
pub struct ProductGraph {
    graph: AdjacencyList,
    products: HashMap<NodeId, Product>,
}

impl ProductGraph {
    pub fn new(directed: bool, weighted: bool) -> Self {
        ProductGraph {
            graph: AdjacencyList::new(directed, weighted),
            products: HashMap::new(),
        }
    }

    /// Read-only view of the underlying graph
    pub fn graph(&self) -> &AdjacencyList {
        &self.graph
    }

    pub fn product(&self, id: NodeId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Register a product as a new node
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        self.graph.add_node(product.id)?;
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Remove a product and every similarity edge touching it
    pub fn remove_product(&mut self, id: NodeId) -> Result<Product> {
        self.graph.remove_node(id)?;
        self.products
            .remove(&id)
            .ok_or(GraphError::NodeNotFound { id })
    }

    /// Record a similarity score between two products
    pub fn add_similarity(&mut self, from: NodeId, to: NodeId, score: f64) -> Result<()> {
        self.graph.add_edge(from, to, score)
    }

    /// Top `top_n` neighbors of `id` by descending similarity.
    ///
    /// Ties keep adjacency order. A product linked more than once is listed
    /// once, with its best score; self-links are ignored.
    pub fn recommendations(&self, id: NodeId, top_n: usize) -> Result<Vec<Recommendation>> {
        let mut edges = self.graph.edges(id)?.to_vec();
        edges.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        let mut seen = HashSet::new();
        let recommendations: Vec<Recommendation> = edges
            .into_iter()
            .filter(|edge| edge.to != id && seen.insert(edge.to))
            .filter_map(|edge| {
                self.products.get(&edge.to).map(|product| Recommendation {
                    product: product.clone(),
                    score: edge.weight,
                })
            })
            .take(top_n)
            .collect();

        tracing::debug!(
            product = id,
            requested = top_n,
            returned = recommendations.len(),
            "recommendations"
        );
        Ok(recommendations)
    }

    /// Add similarity edges derived from label overlap.
    ///
    /// Every unlinked pair whose [`label_similarity`] is positive and at least
    /// `min_score` gets an edge weighted by that score (both directions on a
    /// directed graph). Returns the number of pairs linked.
    pub fn connect_by_labels(&mut self, min_score: f64) -> Result<usize> {
        let mut ids: Vec<NodeId> = self.products.keys().copied().collect();
        ids.sort_unstable();

        let mut pairs = Vec::new();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                if self.graph.has_edge(a, b) || self.graph.has_edge(b, a) {
                    continue;
                }
                if let (Some(pa), Some(pb)) = (self.products.get(&a), self.products.get(&b)) {
                    let score = label_similarity(pa, pb);
                    if score > 0.0 && score >= min_score {
                        pairs.push((a, b, score));
                    }
                }
            }
        }

        for &(a, b, score) in &pairs {
            self.graph.add_edge(a, b, score)?;
            if self.graph.is_directed() {
                self.graph.add_edge(b, a, score)?;
            }
        }

        tracing::debug!(linked = pairs.len(), min_score, "connect_by_labels");
        Ok(pairs.len())
    }
}

/// Jaccard similarity of two products' label sets (0.0 when both are empty)
pub fn label_similarity(a: &Product, b: &Product) -> f64 {
    let left: BTreeSet<&str> = a.labels.iter().map(String::as_str).collect();
    let right: BTreeSet<&str> = b.labels.iter().map(String::as_str).collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}
