//! Traversal commands: bfs, dfs, walk
use rand::rngs::StdRng;
use rand::SeedableRng;

use graphkit_core::error::Result;
use graphkit_core::graph::{bfs, dfs, random_walk, AdjacencyList, NodeId};

use crate::cli::{Cli, OutputFormat};
use crate::commands::{join_nodes, print_json};

pub fn execute_bfs(cli: &Cli, graph: &AdjacencyList, start: NodeId) -> Result<()> {
    let order = bfs(graph, start)?;
    output_order(cli, "bfs", start, &order)
}

pub fn execute_dfs(cli: &Cli, graph: &AdjacencyList, start: NodeId) -> Result<()> {
    let order = dfs(graph, start)?;
    output_order(cli, "dfs", start, &order)
}

/// Execute the walk command; without a seed the walk draws from OS entropy
pub fn execute_walk(
    cli: &Cli,
    graph: &AdjacencyList,
    start: NodeId,
    steps: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let walk = random_walk(graph, start, steps, &mut rng)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "start": start,
            "steps": steps,
            "seed": seed,
            "walk": walk,
        })),
        OutputFormat::Human => {
            println!("{}", join_nodes(&walk));
            Ok(())
        }
    }
}

fn output_order(cli: &Cli, algorithm: &str, start: NodeId, order: &[NodeId]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "algorithm": algorithm,
            "start": start,
            "order": order,
        })),
        OutputFormat::Human => {
            println!("{}", join_nodes(order));
            if !cli.quiet {
                println!("Visited: {} node(s)", order.len());
            }
            Ok(())
        }
    }
}
