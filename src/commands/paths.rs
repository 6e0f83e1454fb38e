//! Shortest-path commands: dijkstra, path, astar
use graphkit_core::error::Result;
use graphkit_core::graph::{a_star, dijkstra, shortest_path, AdjacencyList, NodeId, PathResult};

use crate::cli::{Cli, Heuristic, OutputFormat};
use crate::commands::{distance_json, format_path, print_json};

/// Execute the dijkstra command: one line per node, unreachable nodes marked
pub fn execute_dijkstra(cli: &Cli, graph: &AdjacencyList, start: NodeId) -> Result<()> {
    let result = dijkstra(graph, start)?;

    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = result
                .distances()
                .iter()
                .map(|(&node, &distance)| {
                    serde_json::json!({
                        "id": node,
                        "distance": distance_json(distance),
                        "predecessor": result.predecessor(node),
                    })
                })
                .collect();
            let stats = result.stats();
            print_json(&serde_json::json!({
                "start": start,
                "nodes": nodes,
                "stats": {
                    "expanded": stats.expanded,
                    "relaxed": stats.relaxed,
                    "decreased": stats.decreased,
                    "peak_queue": stats.peak_queue,
                },
            }))
        }
        OutputFormat::Human => {
            for (&node, &distance) in result.distances() {
                match result.predecessor(node) {
                    _ if !distance.is_finite() => println!("{}\tunreachable", node),
                    Some(pred) => println!("{}\t{}\tvia {}", node, distance, pred),
                    None => println!("{}\t{}", node, distance),
                }
            }
            Ok(())
        }
    }
}

pub fn execute_path(cli: &Cli, graph: &AdjacencyList, from: NodeId, to: NodeId) -> Result<()> {
    let result = shortest_path(graph, from, to)?;
    output_path(cli, "dijkstra", &result)
}

pub fn execute_astar(
    cli: &Cli,
    graph: &AdjacencyList,
    from: NodeId,
    to: NodeId,
    heuristic: Heuristic,
) -> Result<()> {
    let result = a_star(graph, from, to, |current, goal| {
        heuristic.estimate(current, goal)
    })?;
    output_path(cli, "a_star", &result)
}

fn output_path(cli: &Cli, algorithm: &str, result: &PathResult) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "algorithm": algorithm,
            "path": result.path,
            "cost": result.cost,
            "hops": result.hops(),
        })),
        OutputFormat::Human => {
            println!("{}", format_path(&result.path));
            if !cli.quiet {
                let hops = result.hops();
                println!(
                    "Cost: {} ({} hop{})",
                    result.cost,
                    hops,
                    if hops == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }
    }
}
