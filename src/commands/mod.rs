//! CLI commands for graphkit

pub mod config;
pub mod dispatch;
pub mod export;
pub mod info;
pub mod ordering;
pub mod paths;
pub mod recommend;
pub mod traverse;

use graphkit_core::error::Result;
use graphkit_core::graph::NodeId;

/// Print a value as pretty JSON on stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Space-separated node list for human output
pub fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a path as `a -> b -> c`
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// JSON-safe distance: `null` stands for an unreachable node
pub fn distance_json(distance: f64) -> serde_json::Value {
    if distance.is_finite() {
        serde_json::json!(distance)
    } else {
        serde_json::Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_format() {
        assert_eq!(join_nodes(&[1, 2, 3]), "1 2 3");
        assert_eq!(join_nodes(&[]), "");
        assert_eq!(format_path(&[1, 3, 4]), "1 -> 3 -> 4");
    }

    #[test]
    fn test_distance_json() {
        assert_eq!(distance_json(2.5), serde_json::json!(2.5));
        assert_eq!(distance_json(f64::INFINITY), serde_json::Value::Null);
    }
}
