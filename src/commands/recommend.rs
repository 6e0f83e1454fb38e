//! Recommend command
use graphkit_core::error::Result;
use graphkit_core::graph::NodeId;
use graphkit_core::product::ProductGraph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

#[derive(Debug, Clone)]
pub struct RecommendOptions {
    pub top_n: usize,
    pub connect_labels: bool,
    pub min_similarity: f64,
}

/// Execute the recommend command
pub fn execute(
    cli: &Cli,
    products: &mut ProductGraph,
    product: NodeId,
    options: &RecommendOptions,
) -> Result<()> {
    if !(0.0..=1.0).contains(&options.min_similarity) {
        graphkit_core::bail_invalid!("min-similarity", options.min_similarity);
    }

    let linked = if options.connect_labels {
        products.connect_by_labels(options.min_similarity)?
    } else {
        0
    };

    let recommendations = products.recommendations(product, options.top_n)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "product": product,
            "linked_by_labels": linked,
            "recommendations": recommendations,
        })),
        OutputFormat::Human => {
            if recommendations.is_empty() && !cli.quiet {
                println!("No recommendations for product {}", product);
            }
            for rec in &recommendations {
                if rec.product.labels.is_empty() {
                    println!("{}\t{}", rec.product.id, rec.score);
                } else {
                    println!(
                        "{}\t{}\t{}",
                        rec.product.id,
                        rec.score,
                        rec.product.labels.join(",")
                    );
                }
            }
            Ok(())
        }
    }
}
