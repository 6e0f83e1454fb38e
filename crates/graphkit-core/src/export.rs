//! Diagram export
//!
//! Renders a graph as a PlantUML document wrapping a DOT graph body. Only the
//! read-only query surface of [`Graph`] is used.

use std::collections::HashMap;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Render `graph` as a PlantUML/DOT diagram.
///
/// Directed graphs become a `digraph` with `->` edges; undirected graphs
/// become a `graph` with `--` edges, each logical edge written once. Weight
/// labels appear only on weighted graphs. Fails with `InvalidValue` when
/// `config` carries an unknown rankdir or an oversized label precision.
pub fn to_plantuml(graph: &dyn Graph, config: &ExportConfig) -> Result<String> {
    config.validate()?;

    let directed = graph.is_directed();
    let (keyword, connector) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut out = String::new();
    out.push_str("@startuml\n");
    out.push_str(&format!("{} G {{\n", keyword));
    out.push_str(&format!("  rankdir={};\n", config.rankdir));

    let nodes = graph.nodes();
    for node in &nodes {
        out.push_str(&format!("  {};\n", node));
    }

    // Reverse entries still owed for undirected edges already written
    let mut pending: HashMap<(NodeId, NodeId), usize> = HashMap::new();
    let mut written = 0;

    for &from in &nodes {
        for edge in graph.edges(from)? {
            if !directed {
                if let Some(count) = pending.get_mut(&(from, edge.to)).filter(|c| **c > 0) {
                    *count -= 1;
                    continue;
                }
                *pending.entry((edge.to, from)).or_insert(0) += 1;
            }

            out.push_str(&format!("  {} {} {}", from, connector, edge.to));
            if graph.is_weighted() {
                out.push_str(&format!(
                    " [label=\"{:.*}\"]",
                    config.label_precision, edge.weight
                ));
            }
            out.push_str(";\n");
            written += 1;
        }
    }

    out.push_str("}\n");
    out.push_str("@enduml\n");

    tracing::debug!(nodes = nodes.len(), edges = written, "rendered diagram");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::AdjacencyList;

    fn edge_lines(diagram: &str) -> Vec<&str> {
        diagram
            .lines()
            .filter(|line| line.contains("->") || line.contains("--"))
            .collect()
    }

    #[test]
    fn test_directed_weighted_diagram() {
        let mut graph = AdjacencyList::new(true, true);
        for node in 0..3 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 2.5).unwrap();

        let diagram = to_plantuml(&graph, &ExportConfig::default()).unwrap();
        assert_eq!(
            diagram,
            "@startuml\n\
             digraph G {\n  \
             rankdir=LR;\n  \
             0;\n  \
             1;\n  \
             2;\n  \
             0 -> 1 [label=\"1.0\"];\n  \
             1 -> 2 [label=\"2.5\"];\n\
             }\n\
             @enduml\n"
        );
    }

    #[test]
    fn test_unweighted_diagram_has_no_labels() {
        let mut graph = AdjacencyList::new(true, false);
        graph.add_node(1).unwrap();
        graph.add_node(2).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();

        let diagram = to_plantuml(&graph, &ExportConfig::default()).unwrap();
        assert_eq!(edge_lines(&diagram), vec!["  1 -> 2;"]);
        assert!(!diagram.contains("label"));
    }

    #[test]
    fn test_undirected_edges_written_once() {
        let mut graph = AdjacencyList::new(false, true);
        for node in 1..=3 {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(1, 2, 0.5).unwrap();
        graph.add_edge(3, 2, 1.5).unwrap();
        graph.add_edge(3, 3, 2.0).unwrap();

        let config = ExportConfig {
            label_precision: 2,
            rankdir: "TB".to_string(),
        };
        let diagram = to_plantuml(&graph, &config).unwrap();

        assert!(diagram.contains("graph G {"));
        assert!(!diagram.contains("digraph"));
        assert!(diagram.contains("rankdir=TB;"));
        assert_eq!(
            edge_lines(&diagram),
            vec![
                "  1 -- 2 [label=\"0.50\"];",
                "  2 -- 3 [label=\"1.50\"];",
                "  3 -- 3 [label=\"2.00\"];",
            ]
        );
        assert_eq!(edge_lines(&diagram).len(), graph.edge_count());
    }

    #[test]
    fn test_undirected_parallel_edges_keep_count() {
        let mut graph = AdjacencyList::new(false, false);
        graph.add_node(1).unwrap();
        graph.add_node(2).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();
        graph.add_edge(2, 1, 0.0).unwrap();

        let diagram = to_plantuml(&graph, &ExportConfig::default()).unwrap();
        assert_eq!(edge_lines(&diagram), vec!["  1 -- 2;", "  1 -- 2;"]);
    }

    #[test]
    fn test_rejects_oversized_precision() {
        let mut graph = AdjacencyList::new(true, true);
        graph.add_node(0).unwrap();
        graph.add_node(1).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();

        let config = ExportConfig {
            label_precision: 70_000,
            ..Default::default()
        };
        assert!(matches!(
            to_plantuml(&graph, &config),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_rankdir() {
        let graph = AdjacencyList::new(true, false);
        let config = ExportConfig {
            rankdir: "SIDEWAYS".to_string(),
            ..Default::default()
        };
        assert!(to_plantuml(&graph, &config).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyList::new(true, false);
        let diagram = to_plantuml(&graph, &ExportConfig::default()).unwrap();
        assert_eq!(diagram, "@startuml\ndigraph G {\n  rankdir=LR;\n}\n@enduml\n");
    }
}
