//! Info command
use graphkit_core::error::Result;
use graphkit_core::graph::{is_dag, AdjacencyList, Graph};

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

/// Execute the info command
pub fn execute(cli: &Cli, graph: &AdjacencyList) -> Result<()> {
    let acyclic = is_dag(graph);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "weighted": graph.is_weighted(),
            "acyclic": acyclic,
        })),
        OutputFormat::Human => {
            println!("Nodes: {}", graph.node_count());
            println!("Edges: {}", graph.edge_count());
            println!(
                "Mode: {}, {}",
                if graph.is_directed() { "directed" } else { "undirected" },
                if graph.is_weighted() { "weighted" } else { "unweighted" }
            );
            if !cli.quiet {
                println!("Acyclic: {}", if acyclic { "yes" } else { "no" });
            }
            Ok(())
        }
    }
}
