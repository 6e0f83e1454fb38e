//! Ordering commands: topo, cycle, cliques
use graphkit_core::error::Result;
use graphkit_core::graph::{detect_cycle, find_cliques, topological_sort, AdjacencyList};

use crate::cli::{Cli, OutputFormat};
use crate::commands::{join_nodes, print_json};

pub fn execute_topo(cli: &Cli, graph: &AdjacencyList) -> Result<()> {
    let order = topological_sort(graph)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "order": order })),
        OutputFormat::Human => {
            println!("{}", join_nodes(&order));
            Ok(())
        }
    }
}

/// Execute the cycle command; reporting a cycle is a result, not an error
pub fn execute_cycle(cli: &Cli, graph: &AdjacencyList) -> Result<()> {
    let cyclic = detect_cycle(graph);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "cycle": cyclic })),
        OutputFormat::Human => {
            if cyclic {
                println!("cycle detected");
            } else {
                println!("no cycle");
            }
            Ok(())
        }
    }
}

pub fn execute_cliques(cli: &Cli, graph: &AdjacencyList, size: usize) -> Result<()> {
    let cliques = find_cliques(graph, size)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "size": size,
            "cliques": cliques,
        })),
        OutputFormat::Human => {
            for clique in &cliques {
                println!("{}", join_nodes(clique));
            }
            if !cli.quiet {
                println!("Found: {} clique(s) of size {}", cliques.len(), size);
            }
            Ok(())
        }
    }
}
